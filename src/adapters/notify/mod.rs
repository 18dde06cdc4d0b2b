//! Log-based tag change notifier
//!
//! Stands in for the notification feed when the engine runs without one.

use crate::core::models::TagChange;
use crate::core::ports::TagChangeNotifier;

/// Writes each tag transition to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl TagChangeNotifier for LogNotifier {
    fn tag_changed(&self, change: &TagChange) {
        log::info!(
            target: "credence::notify",
            "tag change post={} {} -> {} ({}%) at {}",
            change.post_id,
            change.from,
            change.to,
            change.consensus_percentage,
            change.at.to_rfc3339()
        );
    }
}
