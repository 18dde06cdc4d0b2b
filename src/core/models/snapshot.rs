//! Consensus snapshots
//!
//! An immutable record of a post's consensus at one point in time. Only the
//! history tracker creates them, and only by appending.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CredibilityTag, PostId, Tally};

/// Consensus state captured at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusSnapshot {
    /// The post this snapshot describes
    pub post_id: PostId,
    /// Sum of weights behind `accurate` verdicts
    pub accurate_weight: f64,
    /// Sum of weights behind `inaccurate` verdicts
    pub inaccurate_weight: f64,
    /// Rounded consensus percentage, 0-100
    pub consensus_percentage: u8,
    /// Derived credibility tag
    pub tag: CredibilityTag,
    /// When the change that produced this snapshot happened
    pub captured_at: DateTime<Utc>,
}

impl ConsensusSnapshot {
    /// Freeze a tally
    #[must_use]
    pub fn capture(tally: &Tally, captured_at: DateTime<Utc>) -> Self {
        Self {
            post_id: tally.post_id.clone(),
            accurate_weight: tally.accurate_weight,
            inaccurate_weight: tally.inaccurate_weight,
            consensus_percentage: tally.consensus_percentage,
            tag: tally.tag,
            captured_at,
        }
    }

    /// Whether `tally` is materially different (tag or displayed percentage)
    #[must_use]
    pub fn differs_from(&self, tally: &Tally) -> bool {
        self.tag != tally.tag || self.consensus_percentage != tally.consensus_percentage
    }
}

/// Direction of consensus between the two most recent snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Consensus percentage went up
    Rising,
    /// Consensus percentage went down
    Falling,
    /// Percentage unchanged (only the tag moved)
    Steady,
}

impl Trend {
    /// Compare an older snapshot with a newer one
    #[must_use]
    pub fn between(older: &ConsensusSnapshot, newer: &ConsensusSnapshot) -> Self {
        match newer.consensus_percentage.cmp(&older.consensus_percentage) {
            std::cmp::Ordering::Greater => Self::Rising,
            std::cmp::Ordering::Less => Self::Falling,
            std::cmp::Ordering::Equal => Self::Steady,
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rising => write!(f, "rising"),
            Self::Falling => write!(f, "falling"),
            Self::Steady => write!(f, "steady"),
        }
    }
}
