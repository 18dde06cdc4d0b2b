//! Business logic services
//!
//! Single-post, single-threaded building blocks. The concurrent facade
//! that routes calls to them lives in [`crate::engine`].
//!
//! - [`aggregator`] - Fold review records into weighted tallies
//! - [`classifier`] - Map tallies onto credibility tags
//! - [`history`] - Append-only consensus snapshots

pub mod aggregator;
pub mod classifier;
pub mod history;

pub use aggregator::Aggregator;
pub use classifier::TagClassifier;
pub use history::{HistoryTracker, RecentSnapshots};
