//! Review record model
//!
//! A single data point: one reviewer's verdict on one post. A reviewer has
//! at most one active record per post; a later record replaces the earlier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PostId, ReviewerId, Verdict};
use crate::error::{ConsensusError, Result};

/// Weight used for unweighted review
pub const DEFAULT_REVIEWER_WEIGHT: f64 = 1.0;

const fn default_weight() -> f64 {
    DEFAULT_REVIEWER_WEIGHT
}

/// A reviewer's verdict on a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Who reviewed
    pub reviewer_id: ReviewerId,

    /// What was reviewed
    pub post_id: PostId,

    /// The judgement
    pub verdict: Verdict,

    /// Reviewer standing, non-negative
    #[serde(default = "default_weight")]
    pub reviewer_weight: f64,

    /// When the verdict was submitted
    pub submitted_at: DateTime<Utc>,
}

impl ReviewRecord {
    /// Create an unweighted record
    #[must_use]
    pub fn new(
        post_id: PostId,
        reviewer_id: ReviewerId,
        verdict: Verdict,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            reviewer_id,
            post_id,
            verdict,
            reviewer_weight: DEFAULT_REVIEWER_WEIGHT,
            submitted_at,
        }
    }

    /// Set the reviewer weight as given (validated on submit)
    #[must_use]
    pub const fn with_weight(mut self, weight: f64) -> Self {
        self.reviewer_weight = weight;
        self
    }

    /// Set the reviewer weight, clamping negative or NaN input to 0
    #[must_use]
    pub fn with_clamped_weight(mut self, weight: f64) -> Self {
        self.reviewer_weight = if weight.is_nan() { 0.0 } else { weight.max(0.0) };
        self
    }

    /// Check the record is well-formed
    pub fn validate(&self) -> Result<()> {
        if self.post_id.as_str().trim().is_empty() {
            return Err(ConsensusError::InvalidRecord("empty post id".to_string()));
        }
        if self.reviewer_id.as_str().trim().is_empty() {
            return Err(ConsensusError::InvalidRecord("empty reviewer id".to_string()));
        }
        if !self.reviewer_weight.is_finite() {
            return Err(ConsensusError::InvalidRecord(format!(
                "reviewer weight must be finite, got {}",
                self.reviewer_weight
            )));
        }
        if self.reviewer_weight < 0.0 {
            return Err(ConsensusError::InvalidRecord(format!(
                "reviewer weight must be >= 0, got {}",
                self.reviewer_weight
            )));
        }
        Ok(())
    }

    /// Whether `other` carries the same verdict and weight
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn same_judgement(&self, other: &Self) -> bool {
        self.verdict == other.verdict && self.reviewer_weight == other.reviewer_weight
    }
}
