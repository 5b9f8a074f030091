use crate::types::{Gig, Person};

/// Anything that can hand the ranker its two candidate collections.
///
/// The sample `Catalog` implements this today; a real data layer only has to
/// produce the same entity shapes.
pub trait CandidateSource {
    fn people(&self) -> &[Person];
    fn gigs(&self) -> &[Gig];
}
