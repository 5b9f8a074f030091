use serde::{Deserialize, Serialize};
use std::fmt;

use plugmein_core::types::Role;

/// Discovery toggles on the profile screen. They are recorded and shown but
/// nothing consults them when building the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySettings {
    pub profile_visible: bool,
    pub searchable_by_location: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self { profile_visible: true, searchable_by_location: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub city: String,
    pub roles: Vec<Role>,
    pub bio: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub privacy: PrivacySettings,
}

impl Profile {
    pub fn seed() -> Self {
        Self {
            name: "Miliante".into(),
            headline: "Creative / IT".into(),
            city: "Portland, OR".into(),
            roles: vec![Role::Director, Role::Stylist, Role::Producer],
            bio: "Blending music, fashion, and visual storytelling. Open to paid shoots, collaborations, and gig swaps.".into(),
            tags: ["music video", "fashion", "lo-fi", "producer"].iter().map(|t| t.to_string()).collect(),
            privacy: PrivacySettings::default(),
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.privacy.profile_visible = visible;
    }

    pub fn set_searchable_by_location(&mut self, searchable: bool) {
        self.privacy.searchable_by_location = searchable;
    }
}

fn on_off(b: bool) -> &'static str {
    if b { "on" } else { "off" }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roles: Vec<&str> = self.roles.iter().map(Role::as_str).collect();
        writeln!(f, "{} — {}", self.name, self.headline)?;
        writeln!(f, "{} • Roles: {}", self.city, roles.join(", "))?;
        writeln!(f, "{}", self.bio)?;
        writeln!(f, "Tags: {}", self.tags.join(", "))?;
        writeln!(f, "Profile visible: {}", on_off(self.privacy.profile_visible))?;
        write!(f, "Searchable by location: {}", on_off(self.privacy.searchable_by_location))
    }
}
