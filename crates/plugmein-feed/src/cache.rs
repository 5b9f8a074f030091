//! Memoized feed, keyed by the last `(people, gigs, config)` input.
//!
//! Callers re-rank on every filter change; when nothing changed the cached
//! feed is handed back. A 64-bit XxHash of the candidates rejects most misses
//! cheaply; a hit additionally requires the stored inputs to compare equal.
//! NaN never equals itself, so inputs carrying one are always recomputed.
use std::hash::{Hash, Hasher};
use tracing::trace;
use twox_hash::XxHash64;

use plugmein_core::types::{DisplayItem, Gig, Person};

use crate::filter::FilterConfig;
use crate::rank::FeedRanker;

struct Entry {
    fingerprint: u64,
    config: FilterConfig,
    people: Vec<Person>,
    gigs: Vec<Gig>,
    items: Vec<DisplayItem>,
}

impl Entry {
    fn matches(&self, fingerprint: u64, people: &[Person], gigs: &[Gig], config: &FilterConfig) -> bool {
        self.fingerprint == fingerprint
            && &self.config == config
            && self.people.as_slice() == people
            && self.gigs.as_slice() == gigs
    }
}

#[derive(Default)]
pub struct FeedCache {
    ranker: FeedRanker,
    last: Option<Entry>,
    hits: u64,
    misses: u64,
}

impl FeedCache {
    pub fn new(ranker: FeedRanker) -> Self {
        Self { ranker, last: None, hits: 0, misses: 0 }
    }

    pub fn get_or_rank(&mut self, people: &[Person], gigs: &[Gig], config: &FilterConfig) -> &[DisplayItem] {
        let fingerprint = candidates_fingerprint(people, gigs);
        let fresh = matches!(&self.last, Some(e) if e.matches(fingerprint, people, gigs, config));
        if fresh {
            self.hits += 1;
            trace!(fingerprint, "feed cache hit");
        } else {
            self.misses += 1;
            trace!(fingerprint, "feed cache miss");
            let items = self.ranker.rank(people, gigs, config);
            self.last = Some(Entry {
                fingerprint,
                config: config.clone(),
                people: people.to_vec(),
                gigs: gigs.to_vec(),
                items,
            });
        }
        self.last.as_ref().map(|e| e.items.as_slice()).unwrap_or(&[])
    }

    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

fn candidates_fingerprint(people: &[Person], gigs: &[Gig]) -> u64 {
    let mut hasher = XxHash64::with_seed(0);
    people.len().hash(&mut hasher);
    for p in people {
        p.id.hash(&mut hasher);
        p.name.hash(&mut hasher);
        p.role.hash(&mut hasher);
        p.city.hash(&mut hasher);
        p.distance.to_bits().hash(&mut hasher);
        p.tags.hash(&mut hasher);
        p.bio.hash(&mut hasher);
    }
    gigs.len().hash(&mut hasher);
    for g in gigs {
        g.id.hash(&mut hasher);
        g.title.hash(&mut hasher);
        g.org.hash(&mut hasher);
        g.city.hash(&mut hasher);
        g.distance.to_bits().hash(&mut hasher);
        g.paid.hash(&mut hasher);
        g.rate.hash(&mut hasher);
        g.tags.hash(&mut hasher);
        g.description.hash(&mut hasher);
    }
    hasher.finish()
}
