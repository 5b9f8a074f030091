use serde::{Deserialize, Serialize};
use tracing::info;

use plugmein_core::catalog::Catalog;
use plugmein_core::types::Gig;

/// Contents of the "Post a gig" form. Tags arrive as one comma separated
/// string, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GigDraft {
    pub title: String,
    pub org: String,
    pub paid: bool,
    pub rate: String,
    pub city: String,
    pub tags: String,
    pub description: String,
    /// Miles from the viewer; a freshly posted gig sits at the poster's spot.
    pub distance: f64,
}

impl GigDraft {
    pub fn into_gig(self, id: String) -> Gig {
        Gig {
            id,
            tags: parse_tags(&self.tags),
            title: self.title,
            org: self.org,
            city: self.city,
            distance: self.distance,
            paid: self.paid,
            rate: self.rate,
            description: self.description,
        }
    }
}

pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Gigs posted during this session.
#[derive(Debug, Clone, Default)]
pub struct GigBoard {
    posted: Vec<Gig>,
    next_id: u64,
}

impl GigBoard {
    /// Start numbering after the highest `g<n>` id already in `catalog`.
    /// An id at `u64::MAX` has no successor and is left out of the count.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let highest = catalog
            .gigs
            .iter()
            .filter_map(|g| g.id.strip_prefix('g').and_then(|n| n.parse::<u64>().ok()))
            .filter(|n| *n < u64::MAX)
            .max()
            .unwrap_or(0);
        Self { posted: Vec::new(), next_id: highest + 1 }
    }

    /// Every draft is accepted as-is.
    pub fn post(&mut self, draft: GigDraft) -> &Gig {
        if self.next_id == 0 {
            self.next_id = 1;
        }
        let id = format!("g{}", self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        let gig = draft.into_gig(id);
        info!(id = %gig.id, title = %gig.title, paid = gig.paid, "gig posted");
        self.posted.push(gig);
        &self.posted[self.posted.len() - 1]
    }

    pub fn posted(&self) -> &[Gig] {
        &self.posted
    }

    /// Append everything posted so far into the candidate collection.
    pub fn publish_into(&mut self, catalog: &mut Catalog) -> usize {
        let n = self.posted.len();
        catalog.extend_gigs(self.posted.drain(..));
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_split_trimmed_and_compacted() {
        assert_eq!(parse_tags(" director, dp ,,gaffer , "), ["director", "dp", "gaffer"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ").is_empty());
    }

    #[test]
    fn ids_continue_after_seed_gigs() {
        let catalog = Catalog::seed();
        let mut board = GigBoard::for_catalog(&catalog);
        assert_eq!(board.post(GigDraft::default()).id, "g3");
        assert_eq!(board.post(GigDraft::default()).id, "g4");
    }

    #[test]
    fn max_numeric_id_does_not_overflow() {
        let mut catalog = Catalog::seed();
        catalog.gigs[0].id = format!("g{}", u64::MAX);
        catalog.gigs[1].id = "g5".into();
        let mut board = GigBoard::for_catalog(&catalog);
        assert_eq!(board.post(GigDraft::default()).id, "g6");
    }

    #[test]
    fn counter_saturates_at_the_top() {
        let mut board = GigBoard { posted: Vec::new(), next_id: u64::MAX };
        let last = format!("g{}", u64::MAX);
        assert_eq!(board.post(GigDraft::default()).id, last);
        assert_eq!(board.post(GigDraft::default()).id, last);
    }

    #[test]
    fn default_board_starts_at_one() {
        let mut board = GigBoard::default();
        assert_eq!(board.post(GigDraft::default()).id, "g1");
        assert_eq!(board.post(GigDraft::default()).id, "g2");
    }
}
