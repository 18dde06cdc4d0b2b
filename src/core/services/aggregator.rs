//! Aggregator - folds a post's active review records into weighted tallies
//!
//! Holds at most one active record per reviewer. Every mutating method
//! validates fully before touching state, so a rejected call changes nothing.
//!
//! Weights are re-summed from the active records in reviewer order after
//! every change. The same set of records always yields the same sums, no
//! matter how many replacements led there.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::core::models::{PostId, ReviewRecord, ReviewerId, WeightTally};
use crate::error::{ConsensusError, Result};

/// Active verdicts and running weights for one post
#[derive(Debug, Clone)]
pub struct Aggregator {
    post_id: PostId,
    active: BTreeMap<ReviewerId, ReviewRecord>,
    weights: WeightTally,
}

impl Aggregator {
    /// Start an empty aggregator for `post_id`
    #[must_use]
    pub fn new(post_id: PostId) -> Self {
        Self {
            post_id,
            active: BTreeMap::new(),
            weights: WeightTally::default(),
        }
    }

    /// The post being aggregated
    #[must_use]
    pub const fn post_id(&self) -> &PostId {
        &self.post_id
    }

    /// Current running weights
    #[must_use]
    pub const fn weights(&self) -> &WeightTally {
        &self.weights
    }

    /// A reviewer's active record, if any
    #[must_use]
    pub fn active_record(&self, reviewer_id: &ReviewerId) -> Option<&ReviewRecord> {
        self.active.get(reviewer_id)
    }

    /// Number of reviewers with an active verdict
    #[must_use]
    pub fn reviewer_count(&self) -> usize {
        self.active.len()
    }

    /// Check `record` could be applied without changing anything
    pub fn check(&self, record: &ReviewRecord) -> Result<()> {
        record.validate()?;
        if record.post_id != self.post_id {
            return Err(ConsensusError::InvalidRecord(format!(
                "record for post {} routed to post {}",
                record.post_id, self.post_id
            )));
        }
        if let Some(prior) = self.active.get(&record.reviewer_id) {
            ensure_not_before(&self.post_id, prior.submitted_at, record.submitted_at)?;
        }
        Ok(())
    }

    /// Apply a record, replacing the reviewer's prior verdict if present
    ///
    /// Returns whether the weights changed. Resubmitting the same verdict and
    /// weight leaves the tallies untouched.
    pub fn apply(&mut self, record: ReviewRecord) -> Result<bool> {
        self.check(&record)?;

        let changed = self
            .active
            .get(&record.reviewer_id)
            .is_none_or(|prior| !prior.same_judgement(&record));

        self.active.insert(record.reviewer_id.clone(), record);
        if changed {
            self.resum();
        }
        Ok(changed)
    }

    /// Withdraw a reviewer's active verdict
    pub fn withdraw(&mut self, reviewer_id: &ReviewerId, at: DateTime<Utc>) -> Result<ReviewRecord> {
        let prior = self.active.get(reviewer_id).ok_or_else(|| {
            ConsensusError::NotFound(format!(
                "no active review by {reviewer_id} on post {}",
                self.post_id
            ))
        })?;
        ensure_not_before(&self.post_id, prior.submitted_at, at)?;

        let prior = self.active.remove(reviewer_id).ok_or_else(|| {
            ConsensusError::NotFound(format!("no active review by {reviewer_id}"))
        })?;
        self.resum();
        Ok(prior)
    }

    fn resum(&mut self) {
        self.weights = WeightTally::from_records(self.active.values());
    }
}

/// Reject `attempted` if it precedes `latest`
pub(crate) fn ensure_not_before(
    post_id: &PostId,
    latest: DateTime<Utc>,
    attempted: DateTime<Utc>,
) -> Result<()> {
    if attempted < latest {
        return Err(ConsensusError::OutOfOrder {
            post_id: post_id.to_string(),
            latest,
            attempted,
        });
    }
    Ok(())
}
