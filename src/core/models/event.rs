//! Review events and tag-change notifications
//!
//! A [`ReviewEvent`] is what gets journaled: replaying events in order
//! rebuilds the engine. A [`TagChange`] is what the notification feed sees.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CredibilityTag, PostId, ReviewRecord, ReviewerId};

/// One accepted change to a post's review set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReviewEvent {
    /// A reviewer submitted or replaced a verdict
    Submitted(ReviewRecord),
    /// A reviewer withdrew their verdict
    Retracted {
        /// The post
        post_id: PostId,
        /// The reviewer withdrawing
        reviewer_id: ReviewerId,
        /// When the withdrawal happened
        at: DateTime<Utc>,
    },
}

impl ReviewEvent {
    /// The post this event applies to
    #[must_use]
    pub const fn post_id(&self) -> &PostId {
        match self {
            Self::Submitted(record) => &record.post_id,
            Self::Retracted { post_id, .. } => post_id,
        }
    }
}

/// A post's credibility tag moved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagChange {
    /// The post
    pub post_id: PostId,
    /// Tag before the change (`unverified` for a post with no history)
    pub from: CredibilityTag,
    /// Tag after the change
    pub to: CredibilityTag,
    /// Rounded consensus percentage after the change
    pub consensus_percentage: u8,
    /// When the change happened
    pub at: DateTime<Utc>,
}
