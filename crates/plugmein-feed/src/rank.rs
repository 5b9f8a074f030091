use std::cmp::Ordering;
use tracing::debug;

use plugmein_core::traits::CandidateSource;
use plugmein_core::types::{Candidate, DisplayItem, Gig, Person};

use crate::filter::{gig_matches, person_matches, FilterConfig};
use crate::score::ScoreWeights;

/// Blends people and gigs into one feed ordered by descending score.
///
/// Stateless apart from its weights; the filter state belongs to the caller
/// and is passed in on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FeedRanker {
    weights: ScoreWeights,
}

impl FeedRanker {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Filter each kind independently, score, then stable-sort the
    /// people-then-gigs concatenation. Equal scores keep that input order.
    pub fn rank(&self, people: &[Person], gigs: &[Gig], config: &FilterConfig) -> Vec<DisplayItem> {
        let matched_people = people.iter().filter(|p| person_matches(p, config)).map(|p| DisplayItem {
            score: self.weights.person(p),
            candidate: Candidate::Person(p.clone()),
        });
        let matched_gigs = gigs.iter().filter(|g| gig_matches(g, config)).map(|g| DisplayItem {
            score: self.weights.gig(g),
            candidate: Candidate::Gig(g.clone()),
        });
        let mut items: Vec<DisplayItem> = matched_people.chain(matched_gigs).collect();
        items.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        debug!(
            people = people.len(),
            gigs = gigs.len(),
            kept = items.len(),
            radius = config.radius,
            "ranked feed"
        );
        items
    }

    pub fn rank_source(&self, source: &dyn CandidateSource, config: &FilterConfig) -> Vec<DisplayItem> {
        self.rank(source.people(), source.gigs(), config)
    }
}

/// Rank with the default weights.
pub fn rank(people: &[Person], gigs: &[Gig], config: &FilterConfig) -> Vec<DisplayItem> {
    FeedRanker::default().rank(people, gigs, config)
}

pub fn rank_source(source: &dyn CandidateSource, config: &FilterConfig) -> Vec<DisplayItem> {
    FeedRanker::default().rank_source(source, config)
}
