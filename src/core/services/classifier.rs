//! Tag classifier - maps weighted tallies onto credibility tags
//!
//! Pure and deterministic: the same weights and thresholds always yield the
//! same tag.

use crate::core::models::{CredibilityTag, PostId, Tally, Thresholds, WeightTally};
use crate::error::Result;

/// Derives credibility tags from tallies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TagClassifier {
    thresholds: Thresholds,
}

impl Default for TagClassifier {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
        }
    }
}

impl TagClassifier {
    /// Build a classifier, rejecting inconsistent thresholds
    pub fn new(thresholds: Thresholds) -> Result<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    /// The thresholds in effect
    #[must_use]
    pub const fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Classify a total weight and rounded percentage
    ///
    /// Boundaries are inclusive toward the decisive tag: exactly
    /// `true_threshold` is `true`, exactly `false_threshold` is `false`.
    #[must_use]
    pub fn classify(&self, total_weight: f64, percentage: u8) -> CredibilityTag {
        if total_weight < self.thresholds.min_review_weight {
            return CredibilityTag::Unverified;
        }
        if percentage >= self.thresholds.true_threshold {
            CredibilityTag::True
        } else if percentage <= self.thresholds.false_threshold {
            CredibilityTag::False
        } else {
            CredibilityTag::Misleading
        }
    }

    /// Turn raw weights into the read model for `post_id`
    #[must_use]
    pub fn evaluate(&self, post_id: &PostId, weights: &WeightTally) -> Tally {
        let consensus_percentage = weights.rounded_percentage();
        Tally {
            post_id: post_id.clone(),
            accurate_weight: weights.accurate_weight,
            inaccurate_weight: weights.inaccurate_weight,
            consensus_percentage,
            tag: self.classify(weights.total(), consensus_percentage),
            reviewer_count: weights.reviewer_count,
        }
    }
}
