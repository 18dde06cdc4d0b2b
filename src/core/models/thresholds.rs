//! Classifier thresholds
//!
//! Loaded from the `[thresholds]` table of the config file.

use serde::{Deserialize, Serialize};

use crate::error::{ConsensusError, Result};

/// Thresholds that map a tally onto a credibility tag
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Total weight below this is always `unverified`
    #[serde(default = "default_min_review_weight")]
    pub min_review_weight: f64,

    /// Percentage at or above this is `true`
    #[serde(default = "default_true_threshold")]
    pub true_threshold: u8,

    /// Percentage at or below this is `false`
    #[serde(default = "default_false_threshold")]
    pub false_threshold: u8,
}

const fn default_min_review_weight() -> f64 {
    5.0
}

const fn default_true_threshold() -> u8 {
    70
}

const fn default_false_threshold() -> u8 {
    30
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_review_weight: default_min_review_weight(),
            true_threshold: default_true_threshold(),
            false_threshold: default_false_threshold(),
        }
    }
}

impl Thresholds {
    /// Reject threshold combinations that leave the tag ambiguous
    pub fn validate(&self) -> Result<()> {
        if !self.min_review_weight.is_finite() || self.min_review_weight < 0.0 {
            return Err(ConsensusError::InvalidConfig(format!(
                "min_review_weight must be a finite number >= 0, got {}",
                self.min_review_weight
            )));
        }
        if self.true_threshold > 100 {
            return Err(ConsensusError::InvalidConfig(format!(
                "true_threshold must be <= 100, got {}",
                self.true_threshold
            )));
        }
        if self.false_threshold >= self.true_threshold {
            return Err(ConsensusError::InvalidConfig(format!(
                "false_threshold ({}) must be below true_threshold ({})",
                self.false_threshold, self.true_threshold
            )));
        }
        Ok(())
    }
}
