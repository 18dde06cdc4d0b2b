//! Tag change notification port

use super::super::models::TagChange;

/// Receives credibility tag transitions (e.g. the notification feed)
///
/// Called after the new state is visible to readers, outside any lock.
#[cfg_attr(test, mockall::automock)]
pub trait TagChangeNotifier: Send + Sync {
    /// A post's tag moved
    fn tag_changed(&self, change: &TagChange);
}
