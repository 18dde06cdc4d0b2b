//! Review journal port
//!
//! Defines the interface for persisting accepted review events.

use super::super::models::ReviewEvent;

/// Durable, ordered log of accepted review events
///
/// Replaying [`ReviewJournal::load`] in order through the engine rebuilds
/// tallies and history exactly.
#[cfg_attr(test, mockall::automock)]
pub trait ReviewJournal: Send + Sync {
    /// Append an event that the engine has accepted
    fn append(&self, event: &ReviewEvent) -> anyhow::Result<()>;

    /// Load every event in the order it was appended
    fn load(&self) -> anyhow::Result<Vec<ReviewEvent>>;
}
