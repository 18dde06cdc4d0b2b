//! Weighted tallies
//!
//! [`WeightTally`] is the aggregator's weighted sum. [`Tally`] is the read
//! model handed to callers once a tag has been derived.

use serde::{Deserialize, Serialize};

use super::{CredibilityTag, PostId, ReviewRecord, Verdict};

/// Weighted sums for one post
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightTally {
    /// Sum of weights behind `accurate` verdicts
    pub accurate_weight: f64,
    /// Sum of weights behind `inaccurate` verdicts
    pub inaccurate_weight: f64,
    /// Number of reviewers with an active verdict
    pub reviewer_count: usize,
}

impl WeightTally {
    /// Count a reviewer's weight toward a verdict
    pub fn add(&mut self, verdict: Verdict, weight: f64) {
        match verdict {
            Verdict::Accurate => self.accurate_weight += weight,
            Verdict::Inaccurate => self.inaccurate_weight += weight,
        }
        self.reviewer_count += 1;
    }

    /// Sum a set of active records, in the order given
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a ReviewRecord>) -> Self {
        records.into_iter().fold(Self::default(), |mut tally, record| {
            tally.add(record.verdict, record.reviewer_weight);
            tally
        })
    }

    /// Combined weight of all active verdicts
    #[must_use]
    pub fn total(&self) -> f64 {
        self.accurate_weight + self.inaccurate_weight
    }

    /// Weighted share of `accurate` verdicts, 0 when nothing is weighed
    #[must_use]
    pub fn percentage(&self) -> f64 {
        let total = self.total();
        if total <= 0.0 {
            return 0.0;
        }
        (self.accurate_weight / total * 100.0).clamp(0.0, 100.0)
    }

    /// Percentage rounded to the nearest integer for display
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rounded_percentage(&self) -> u8 {
        self.percentage().round() as u8
    }
}

/// Consensus state of a post as seen by readers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tally {
    /// The post this tally describes
    pub post_id: PostId,
    /// Sum of weights behind `accurate` verdicts
    pub accurate_weight: f64,
    /// Sum of weights behind `inaccurate` verdicts
    pub inaccurate_weight: f64,
    /// Rounded consensus percentage, 0-100
    pub consensus_percentage: u8,
    /// Derived credibility tag
    pub tag: CredibilityTag,
    /// Number of reviewers with an active verdict
    pub reviewer_count: usize,
}

impl Tally {
    /// Zero state for a post nobody has reviewed
    #[must_use]
    pub const fn empty(post_id: PostId) -> Self {
        Self {
            post_id,
            accurate_weight: 0.0,
            inaccurate_weight: 0.0,
            consensus_percentage: 0,
            tag: CredibilityTag::Unverified,
            reviewer_count: 0,
        }
    }

    /// Combined weight of all active verdicts
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.accurate_weight + self.inaccurate_weight
    }
}
