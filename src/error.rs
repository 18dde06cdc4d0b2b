//! Error taxonomy for the consensus engine
//!
//! Every failure leaves engine state untouched: a rejected call never
//! applies a partial tally update.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors surfaced by the consensus engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsensusError {
    /// Malformed input (negative weight, unknown verdict, empty identifier)
    #[error("invalid review record: {0}")]
    InvalidRecord(String),

    /// No recorded history for the requested post or reviewer
    #[error("not found: {0}")]
    NotFound(String),

    /// A timestamp precedes the latest one already recorded
    #[error("out-of-order timestamp for post {post_id}: {attempted} precedes {latest}")]
    OutOfOrder {
        /// Post whose ordering was violated
        post_id: String,
        /// Latest timestamp already recorded
        latest: DateTime<Utc>,
        /// Rejected timestamp
        attempted: DateTime<Utc>,
    },

    /// Classifier thresholds failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ConsensusError {
    /// Whether this error means "nothing recorded yet" rather than a fault
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result alias used throughout the engine
pub type Result<T> = std::result::Result<T, ConsensusError>;
