//! History tracker - append-only consensus snapshots for one post
//!
//! Entries sit behind an `Arc` so [`RecentSnapshots`] views can be handed to
//! readers without holding a lock. Appending while a view is alive copies
//! the backing vector once; the view keeps seeing what it was given.

use std::iter::{Rev, Take};
use std::slice::Iter;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::aggregator::ensure_not_before;
use crate::core::models::{ConsensusSnapshot, PostId, Trend};
use crate::error::{ConsensusError, Result};

/// Ordered snapshots for one post
#[derive(Debug, Clone)]
pub struct HistoryTracker {
    post_id: PostId,
    entries: Arc<Vec<ConsensusSnapshot>>,
}

impl HistoryTracker {
    /// Start an empty history for `post_id`
    #[must_use]
    pub fn new(post_id: PostId) -> Self {
        Self {
            post_id,
            entries: Arc::new(Vec::new()),
        }
    }

    /// Check a snapshot captured at `at` could be appended
    pub fn check_order(&self, at: DateTime<Utc>) -> Result<()> {
        match self.latest() {
            Some(last) => ensure_not_before(&self.post_id, last.captured_at, at),
            None => Ok(()),
        }
    }

    /// Append a snapshot; its timestamp must not precede the last one
    pub fn append(&mut self, snapshot: ConsensusSnapshot) -> Result<()> {
        if snapshot.post_id != self.post_id {
            return Err(ConsensusError::InvalidRecord(format!(
                "snapshot for post {} appended to history of {}",
                snapshot.post_id, self.post_id
            )));
        }
        self.check_order(snapshot.captured_at)?;
        Arc::make_mut(&mut self.entries).push(snapshot);
        Ok(())
    }

    /// The most recent `limit` snapshots, newest first
    #[must_use]
    pub fn recent(&self, limit: usize) -> RecentSnapshots {
        RecentSnapshots {
            entries: Arc::clone(&self.entries),
            limit,
        }
    }

    /// The newest snapshot
    #[must_use]
    pub fn latest(&self) -> Option<&ConsensusSnapshot> {
        self.entries.last()
    }

    /// Direction between the two newest snapshots
    #[must_use]
    pub fn trend(&self) -> Option<Trend> {
        match self.entries.as_slice() {
            [.., older, newer] => Some(Trend::between(older, newer)),
            _ => None,
        }
    }

    /// Number of snapshots recorded
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A newest-first window over a post's history
///
/// Iterating does not consume the view; call [`RecentSnapshots::iter`]
/// again to restart.
#[derive(Debug, Clone)]
pub struct RecentSnapshots {
    entries: Arc<Vec<ConsensusSnapshot>>,
    limit: usize,
}

impl RecentSnapshots {
    /// A view with nothing in it
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: Arc::new(Vec::new()),
            limit: 0,
        }
    }

    /// Iterate newest first, at most `limit` entries
    pub fn iter(&self) -> Take<Rev<Iter<'_, ConsensusSnapshot>>> {
        self.entries.iter().rev().take(self.limit)
    }

    /// Number of entries the view yields
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len().min(self.limit)
    }

    /// Whether the view yields nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> IntoIterator for &'a RecentSnapshots {
    type Item = &'a ConsensusSnapshot;
    type IntoIter = Take<Rev<Iter<'a, ConsensusSnapshot>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
