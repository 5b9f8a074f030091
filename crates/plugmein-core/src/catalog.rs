//! Candidate collections: the built-in sample data and a JSON catalog loader.
//!
//! A catalog directory may contain any number of `*.json` files, each shaped
//! `{ "people": [...], "gigs": [...] }` with both keys optional. Files are read
//! in sorted path order and their entries concatenated, so the order records
//! appear in is stable across runs.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::traits::CandidateSource;
use crate::types::{Gig, Person, Role};

/// Tag chips offered by the filter panel.
pub const ALL_TAGS: [&str; 13] = [
    "director",
    "dp",
    "editor",
    "photographer",
    "stylist",
    "mua",
    "producer",
    "colorist",
    "fashion",
    "lo-fi",
    "archive",
    "runway",
    "music video",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub gigs: Vec<Gig>,
}

impl Catalog {
    pub fn new(people: Vec<Person>, gigs: Vec<Gig>) -> Self {
        Self { people, gigs }
    }

    /// The sample people and gigs the prototype ships with.
    pub fn seed() -> Self {
        Self { people: seed_people(), gigs: seed_gigs() }
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty() && self.gigs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.people.len() + self.gigs.len()
    }

    pub fn push_gig(&mut self, gig: Gig) {
        self.gigs.push(gig);
    }

    pub fn extend_gigs<I: IntoIterator<Item = Gig>>(&mut self, gigs: I) {
        self.gigs.extend(gigs);
    }

    /// Load every `*.json` catalog file under `dir`.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::NotFound(format!("catalog directory {}", dir.display())));
        }
        let files = list_json_files(dir)?;
        if files.is_empty() {
            warn!(dir = %dir.display(), "no catalog files found");
            return Ok(Self::default());
        }
        let mut catalog = Self::default();
        for path in &files {
            let part = Self::load_file(path)?;
            debug!(path = %path.display(), people = part.people.len(), gigs = part.gigs.len(), "loaded catalog file");
            catalog.people.extend(part.people);
            catalog.gigs.extend(part.gigs);
        }
        debug!(files = files.len(), candidates = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        serde_json::from_str(&raw).map_err(|source| Error::Catalog { path: path.to_path_buf(), source })
    }
}

impl CandidateSource for Catalog {
    fn people(&self) -> &[Person] {
        &self.people
    }

    fn gigs(&self) -> &[Gig] {
        &self.gigs
    }
}

/// Every `*.json` file under `root`, links followed, in sorted path order.
/// An entry the walk cannot read fails the whole listing.
fn list_json_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            warn!(path = %path.display(), error = %e, "unreadable catalog entry");
            let msg = e.to_string();
            let source = e.into_io_error().unwrap_or_else(|| io::Error::other(msg));
            Error::Io { path, source }
        })?;
        if entry.file_type().is_file() && entry.path().extension().and_then(|s| s.to_str()) == Some("json") {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

fn seed_people() -> Vec<Person> {
    vec![
        Person {
            id: "p1".into(),
            name: "Nova J.".into(),
            role: Role::Director,
            city: "Portland, OR".into(),
            distance: 3.0,
            tags: tags(&["music video", "fashion", "lo-fi"]),
            bio: "Director focused on gritty lo-fi textures and high-energy live shoots.".into(),
        },
        Person {
            id: "p2".into(),
            name: "Milo A.".into(),
            role: Role::Photographer,
            city: "Portland, OR".into(),
            distance: 7.0,
            tags: tags(&["editorial", "film", "portraits"]),
            bio: "Portrait + editorial film photography. Always down for test shoots.".into(),
        },
        Person {
            id: "p3".into(),
            name: "Kita R.".into(),
            role: Role::Stylist,
            city: "Vancouver, WA".into(),
            distance: 11.0,
            tags: tags(&["streetwear", "archive", "runway"]),
            bio: "Streetwear/archival styling with a focus on texture + silhouette.".into(),
        },
    ]
}

fn seed_gigs() -> Vec<Gig> {
    vec![
        Gig {
            id: "g1".into(),
            title: "R&B video night shoot".into(),
            org: "Indie Artist — ASC3".into(),
            city: "Portland, OR".into(),
            distance: 4.0,
            paid: true,
            rate: "$250 flat".into(),
            tags: tags(&["director", "dp", "gaffer"]),
            description: "Moody nighttime car scene, neon signage, 3-4 hour shoot.".into(),
        },
        Gig {
            id: "g2".into(),
            title: "Lookbook — fall capsule".into(),
            org: "Miliante Worldwide".into(),
            city: "Portland, OR".into(),
            distance: 9.0,
            paid: false,
            rate: "Unpaid + credits + high-res selects".into(),
            tags: tags(&["photographer", "mua", "stylist"]),
            description: "Outdoor editorial with VHS alt-pop vibe. 1 afternoon.".into(),
        },
    ]
}
