//! Domain types shared by the feed ranker and the mock surfaces.

use serde::{Deserialize, Serialize};
use std::fmt;

pub type CandidateId = String;

/// Creative role a person advertises.
///
/// The five listed roles are the ones the filter control offers; anything
/// else is kept verbatim in `Other`. Serialized as its display string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Director,
    Photographer,
    Stylist,
    Mua,
    Producer,
    Other(String),
}

impl Role {
    pub const LISTED: [Role; 5] = [
        Role::Director,
        Role::Photographer,
        Role::Stylist,
        Role::Mua,
        Role::Producer,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Role::Director => "Director",
            Role::Photographer => "Photographer",
            Role::Stylist => "Stylist",
            Role::Mua => "MUA",
            Role::Producer => "Producer",
            Role::Other(s) => s,
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Director" => Role::Director,
            "Photographer" => Role::Photographer,
            "Stylist" => Role::Stylist,
            "MUA" => Role::Mua,
            "Producer" => Role::Producer,
            _ => Role::Other(s),
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        Role::from(s.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(s) => s,
            listed => listed.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A creative looking to be discovered.
///
/// `distance` is miles from the viewer and is precomputed upstream; nothing in
/// this workspace derives it from coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: CandidateId,
    pub name: String,
    pub role: Role,
    pub city: String,
    pub distance: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub bio: String,
}

/// A posted gig. `rate` is free-form display text, not an amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gig {
    pub id: CandidateId,
    pub title: String,
    pub org: String,
    pub city: String,
    pub distance: f64,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub rate: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Person,
    Gig,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Person => f.write_str("person"),
            ItemKind::Gig => f.write_str("gig"),
        }
    }
}

/// Either kind of record the feed can show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Candidate {
    Person(Person),
    Gig(Gig),
}

impl Candidate {
    pub fn kind(&self) -> ItemKind {
        match self {
            Candidate::Person(_) => ItemKind::Person,
            Candidate::Gig(_) => ItemKind::Gig,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Candidate::Person(p) => &p.id,
            Candidate::Gig(g) => &g.id,
        }
    }

    pub fn distance(&self) -> f64 {
        match self {
            Candidate::Person(p) => p.distance,
            Candidate::Gig(g) => g.distance,
        }
    }
}

/// One ranked feed entry. `score` is only meaningful relative to other
/// entries of the same pass; higher sorts first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayItem {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub score: f64,
}

impl DisplayItem {
    pub fn kind(&self) -> ItemKind {
        self.candidate.kind()
    }

    pub fn as_person(&self) -> Option<&Person> {
        match &self.candidate {
            Candidate::Person(p) => Some(p),
            Candidate::Gig(_) => None,
        }
    }

    pub fn as_gig(&self) -> Option<&Gig> {
        match &self.candidate {
            Candidate::Gig(g) => Some(g),
            Candidate::Person(_) => None,
        }
    }
}

impl fmt::Display for DisplayItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.candidate {
            Candidate::Person(p) => write!(
                f,
                "[person] {} · {} · {} • {} mi · score {}",
                p.name, p.role, p.city, p.distance, self.score
            ),
            Candidate::Gig(g) => {
                let badge = if g.paid { "Paid" } else { "Unpaid" };
                write!(
                    f,
                    "[gig] {} · {} · {} • {} mi · {}",
                    g.title, g.org, g.city, g.distance, badge
                )?;
                if !g.rate.is_empty() {
                    write!(f, " ({})", g.rate)?;
                }
                write!(f, " · score {}", self.score)
            }
        }
    }
}
