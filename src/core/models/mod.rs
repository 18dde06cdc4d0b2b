//! Domain models for credence
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ReviewRecord`] - "This reviewer judged this post accurate/inaccurate"
//! - [`Verdict`] - The two allowed judgements
//! - [`CredibilityTag`] - The discrete label shown next to a post
//! - [`Thresholds`] - Classifier configuration
//! - [`WeightTally`] / [`Tally`] - Raw weights and the derived read model
//! - [`ConsensusSnapshot`] - Immutable history entry
//! - [`ReviewEvent`] / [`TagChange`] - Journal entries and notifications

mod event;
mod ids;
mod record;
mod snapshot;
mod tag;
mod tally;
mod thresholds;
mod verdict;

pub use event::{ReviewEvent, TagChange};
pub use ids::{PostId, ReviewerId};
pub use record::{DEFAULT_REVIEWER_WEIGHT, ReviewRecord};
pub use snapshot::{ConsensusSnapshot, Trend};
pub use tag::CredibilityTag;
pub use tally::{Tally, WeightTally};
pub use thresholds::Thresholds;
pub use verdict::Verdict;
