//! plugmein-feed
//!
//! The discovery feed: per-kind filter predicates, the distance/paid score,
//! the blended ranking pass and a memoizing cache for callers that recompute
//! on every filter change.
pub mod cache;
pub mod filter;
pub mod rank;
pub mod score;

pub use cache::FeedCache;
pub use filter::{FilterConfig, RoleFilter};
pub use rank::{rank, rank_source, FeedRanker};
pub use score::ScoreWeights;
