//! plugmein-board
//!
//! Local, non-persisted surfaces around the feed: posting gigs, the message
//! thread and the profile card. Nothing here validates or stores anything
//! beyond the current process.
pub mod gigs;
pub mod messages;
pub mod profile;

pub use gigs::{parse_tags, GigBoard, GigDraft};
pub use messages::{Message, Thread};
pub use profile::{PrivacySettings, Profile};
