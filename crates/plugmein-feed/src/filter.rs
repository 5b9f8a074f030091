use serde::{Deserialize, Serialize};
use std::fmt;

use plugmein_core::types::{Gig, Person};

/// Role constraint from the filter panel. Only people are subject to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoleFilter {
    #[default]
    Any,
    Exact(String),
}

impl RoleFilter {
    pub fn allows(&self, role: &str) -> bool {
        match self {
            RoleFilter::Any => true,
            RoleFilter::Exact(want) => want == role,
        }
    }
}

impl From<String> for RoleFilter {
    fn from(s: String) -> Self {
        if s == "any" { RoleFilter::Any } else { RoleFilter::Exact(s) }
    }
}

impl From<&str> for RoleFilter {
    fn from(s: &str) -> Self {
        RoleFilter::from(s.to_string())
    }
}

impl From<RoleFilter> for String {
    fn from(r: RoleFilter) -> Self {
        match r {
            RoleFilter::Any => "any".to_string(),
            RoleFilter::Exact(s) => s,
        }
    }
}

impl fmt::Display for RoleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleFilter::Any => f.write_str("any"),
            RoleFilter::Exact(s) => f.write_str(s),
        }
    }
}

/// The query one ranking pass executes.
///
/// Every field is independent and any combination is valid, including ones
/// that match nothing. `radius` is inclusive. An empty `search_text` or an
/// empty `selected_tags` disables that predicate. Tags match on any overlap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub radius: u32,
    pub role: RoleFilter,
    pub paid_only: bool,
    pub search_text: String,
    pub selected_tags: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            radius: 10,
            role: RoleFilter::Any,
            paid_only: false,
            search_text: String::new(),
            selected_tags: Vec::new(),
        }
    }
}

impl FilterConfig {
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_role(mut self, role: impl Into<RoleFilter>) -> Self {
        self.role = role.into();
        self
    }

    pub fn with_paid_only(mut self, paid_only: bool) -> Self {
        self.paid_only = paid_only;
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Tag chip behaviour: select the tag if absent, deselect it if present.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.selected_tags.iter().position(|t| t == tag) {
            self.selected_tags.remove(pos);
        } else {
            self.selected_tags.push(tag.to_string());
        }
    }

    /// Add `tag` unless it is already selected.
    pub fn select_tag(&mut self, tag: &str) {
        if !self.selected_tags.iter().any(|t| t == tag) {
            self.selected_tags.push(tag.to_string());
        }
    }

    fn within_radius(&self, distance: f64) -> bool {
        distance <= f64::from(self.radius)
    }

    fn tags_overlap(&self, tags: &[String]) -> bool {
        self.selected_tags.is_empty() || self.selected_tags.iter().any(|t| tags.contains(t))
    }

    fn text_matches(&self, haystack: impl FnOnce() -> String) -> bool {
        self.search_text.is_empty() || haystack().contains(&self.search_text.to_lowercase())
    }
}

/// People pass on radius, role, tags and text. `paid_only` never applies.
pub fn person_matches(person: &Person, config: &FilterConfig) -> bool {
    config.within_radius(person.distance)
        && config.role.allows(person.role.as_str())
        && config.tags_overlap(&person.tags)
        && config.text_matches(|| person_haystack(person))
}

/// Gigs pass on radius, paid flag, tags and text. `role` never applies.
pub fn gig_matches(gig: &Gig, config: &FilterConfig) -> bool {
    config.within_radius(gig.distance)
        && (!config.paid_only || gig.paid)
        && config.tags_overlap(&gig.tags)
        && config.text_matches(|| gig_haystack(gig))
}

// Fields are glued without a separator; only the tags are space-joined.
fn person_haystack(p: &Person) -> String {
    format!("{}{}{}{}", p.name, p.role.as_str(), p.city, p.tags.join(" ")).to_lowercase()
}

fn gig_haystack(g: &Gig) -> String {
    format!("{}{}{}{}", g.title, g.org, g.city, g.tags.join(" ")).to_lowercase()
}
