use serde::{Deserialize, Serialize};

use plugmein_core::config::FeedSettings;
use plugmein_core::types::{Gig, Person};

/// Weights of the relevance heuristic.
///
/// Both kinds share one scale: `base - distance`, with paid gigs getting a
/// flat `paid_boost` on top. People and gigs therefore interleave in the
/// blended feed instead of clustering by kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub base: f64,
    pub paid_boost: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self { base: 100.0, paid_boost: 10.0 }
    }
}

impl From<&FeedSettings> for ScoreWeights {
    fn from(s: &FeedSettings) -> Self {
        Self { base: s.base_score, paid_boost: s.paid_boost }
    }
}

impl ScoreWeights {
    pub fn person(&self, person: &Person) -> f64 {
        self.base - person.distance
    }

    pub fn gig(&self, gig: &Gig) -> f64 {
        let boost = if gig.paid { self.paid_boost } else { 0.0 };
        boost + (self.base - gig.distance)
    }
}
