//! Port traits (interfaces) for external collaborators
//!
//! The engine keeps consensus state in memory. Anything that must outlive
//! the process, or reach another part of the application, goes through
//! these traits.
//!
//! Implementations live in the `adapters` module.

mod journal;
mod notifier;

#[cfg(test)]
pub use journal::MockReviewJournal;
pub use journal::ReviewJournal;
#[cfg(test)]
pub use notifier::MockTagChangeNotifier;
pub use notifier::TagChangeNotifier;
