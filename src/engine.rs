//! Consensus engine - the concurrent entry point
//!
//! Keeps one [`Aggregator`] and one [`HistoryTracker`] per post in a
//! partitioned lock table. Each post slot has:
//!
//! - a writer mutex that serializes `submit`/`retract` for that post, and
//! - a published `RwLock` holding the tally and history readers see.
//!
//! A writer validates and computes under its mutex, then swaps the new
//! tally and snapshot into the published lock in one short critical
//! section. Readers never see a half-applied update, and posts never
//! contend with each other.
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use credence::core::models::{CredibilityTag, ReviewRecord, Verdict};
//! use credence::engine::ConsensusEngine;
//!
//! let engine = ConsensusEngine::default();
//! let record = ReviewRecord::new("post-1".into(), "alice".into(), Verdict::Accurate, Utc::now())
//!     .with_weight(10.0);
//! let snapshot = engine.submit(record).unwrap().unwrap();
//! assert_eq!(snapshot.tag, CredibilityTag::True);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};

use crate::core::models::{
    ConsensusSnapshot, CredibilityTag, PostId, ReviewEvent, ReviewRecord, ReviewerId, Tally,
    TagChange, Trend,
};
use crate::core::ports::{ReviewJournal, TagChangeNotifier};
use crate::core::services::{Aggregator, HistoryTracker, RecentSnapshots, TagClassifier};
use crate::error::{ConsensusError, Result};

/// State readers are allowed to see for one post
#[derive(Debug)]
struct Published {
    tally: Tally,
    history: HistoryTracker,
}

/// One entry in the lock table
#[derive(Debug)]
struct PostSlot {
    writer: Mutex<Aggregator>,
    published: RwLock<Published>,
}

impl PostSlot {
    fn new(post_id: &PostId) -> Self {
        Self {
            writer: Mutex::new(Aggregator::new(post_id.clone())),
            published: RwLock::new(Published {
                tally: Tally::empty(post_id.clone()),
                history: HistoryTracker::new(post_id.clone()),
            }),
        }
    }
}

/// Whether a tag change reaches the notifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Announce {
    Yes,
    No,
}

/// Outcome of replaying a journal into an engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Events applied
    pub applied: usize,
    /// Events rejected (logged and skipped)
    pub rejected: usize,
    /// Snapshots produced while replaying
    pub snapshots: usize,
}

/// Thread-safe credibility consensus engine
pub struct ConsensusEngine {
    classifier: TagClassifier,
    posts: RwLock<HashMap<PostId, Arc<PostSlot>>>,
    notifier: Option<Arc<dyn TagChangeNotifier>>,
}

impl std::fmt::Debug for ConsensusEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsensusEngine")
            .field("classifier", &self.classifier)
            .field("posts", &self.posts.read().len())
            .field("notifier", &self.notifier.is_some())
            .finish()
    }
}

impl Default for ConsensusEngine {
    fn default() -> Self {
        Self::new(TagClassifier::default())
    }
}

impl ConsensusEngine {
    /// Create an engine around a classifier
    #[must_use]
    pub fn new(classifier: TagClassifier) -> Self {
        Self {
            classifier,
            posts: RwLock::new(HashMap::new()),
            notifier: None,
        }
    }

    /// Deliver tag transitions to `notifier`
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn TagChangeNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// The classifier in use
    #[must_use]
    pub const fn classifier(&self) -> &TagClassifier {
        &self.classifier
    }

    /// Submit or replace a reviewer's verdict
    ///
    /// Returns the new snapshot when the tag or rounded percentage changed
    /// (or on the first accepted record for a post), `None` otherwise.
    pub fn submit(&self, record: ReviewRecord) -> Result<Option<ConsensusSnapshot>> {
        self.submit_as(record, Announce::Yes)
    }

    fn submit_as(&self, record: ReviewRecord, announce: Announce) -> Result<Option<ConsensusSnapshot>> {
        record.validate()?;
        let slot = self.slot_or_insert(&record.post_id);
        let mut aggregator = slot.writer.lock();

        let at = record.submitted_at;
        slot.published.read().history.check_order(at)?;
        aggregator.check(&record)?;

        log::debug!(
            "submit post={} reviewer={} verdict={} weight={}",
            record.post_id,
            record.reviewer_id,
            record.verdict,
            record.reviewer_weight
        );

        if !aggregator.apply(record)? {
            return Ok(None);
        }
        Ok(self.publish(&slot, &aggregator, at, announce))
    }

    /// Withdraw a reviewer's active verdict
    pub fn retract(
        &self,
        post_id: &PostId,
        reviewer_id: &ReviewerId,
        at: DateTime<Utc>,
    ) -> Result<Option<ConsensusSnapshot>> {
        self.retract_as(post_id, reviewer_id, at, Announce::Yes)
    }

    fn retract_as(
        &self,
        post_id: &PostId,
        reviewer_id: &ReviewerId,
        at: DateTime<Utc>,
        announce: Announce,
    ) -> Result<Option<ConsensusSnapshot>> {
        let slot = self
            .slot(post_id)
            .ok_or_else(|| ConsensusError::NotFound(format!("no reviews for post {post_id}")))?;
        let mut aggregator = slot.writer.lock();

        slot.published.read().history.check_order(at)?;
        aggregator.withdraw(reviewer_id, at)?;

        log::debug!("retract post={post_id} reviewer={reviewer_id}");
        Ok(self.publish(&slot, &aggregator, at, announce))
    }

    /// Current tally for a post
    ///
    /// Fails with `NotFound` when nothing has ever been recorded for it.
    pub fn get_tally(&self, post_id: &PostId) -> Result<Tally> {
        let slot = self
            .slot(post_id)
            .ok_or_else(|| ConsensusError::NotFound(format!("no reviews for post {post_id}")))?;
        let published = slot.published.read();
        if published.history.is_empty() {
            return Err(ConsensusError::NotFound(format!("no reviews for post {post_id}")));
        }
        Ok(published.tally.clone())
    }

    /// Current tally, or the zero state for an unreviewed post
    #[must_use]
    pub fn tally_or_empty(&self, post_id: &PostId) -> Tally {
        self.get_tally(post_id).unwrap_or_else(|_| Tally::empty(post_id.clone()))
    }

    /// Up to `limit` snapshots for a post, newest first
    #[must_use]
    pub fn recent(&self, post_id: &PostId, limit: usize) -> RecentSnapshots {
        self.slot(post_id).map_or_else(RecentSnapshots::empty, |slot| {
            slot.published.read().history.recent(limit)
        })
    }

    /// Direction of the latest consensus move for a post
    #[must_use]
    pub fn trend(&self, post_id: &PostId) -> Option<Trend> {
        self.slot(post_id).and_then(|slot| slot.published.read().history.trend())
    }

    /// Posts with at least one recorded snapshot, sorted
    #[must_use]
    pub fn post_ids(&self) -> Vec<PostId> {
        let posts = self.posts.read();
        let mut ids: Vec<PostId> = posts
            .iter()
            .filter(|(_, slot)| !slot.published.read().history.is_empty())
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// Apply a journaled event as if it had just arrived
    pub fn apply_event(&self, event: ReviewEvent) -> Result<Option<ConsensusSnapshot>> {
        self.apply_event_as(event, Announce::Yes)
    }

    fn apply_event_as(&self, event: ReviewEvent, announce: Announce) -> Result<Option<ConsensusSnapshot>> {
        match event {
            ReviewEvent::Submitted(record) => self.submit_as(record, announce),
            ReviewEvent::Retracted {
                post_id,
                reviewer_id,
                at,
            } => self.retract_as(&post_id, &reviewer_id, at, announce),
        }
    }

    /// Rebuild state from every event in `journal`
    ///
    /// Events the engine rejects are logged and skipped; the journal is
    /// only supposed to contain accepted events. Tag changes found while
    /// replaying were announced when they first happened and are not sent
    /// to the notifier again.
    pub fn restore(&self, journal: &dyn ReviewJournal) -> anyhow::Result<ReplaySummary> {
        let mut summary = ReplaySummary::default();
        for event in journal.load()? {
            let post_id = event.post_id().clone();
            match self.apply_event_as(event, Announce::No) {
                Ok(snapshot) => {
                    summary.applied += 1;
                    if snapshot.is_some() {
                        summary.snapshots += 1;
                    }
                },
                Err(e) => {
                    log::warn!("skipping journaled event for post {post_id}: {e}");
                    summary.rejected += 1;
                },
            }
        }
        log::debug!(
            "restored {} event(s), {} rejected, {} snapshot(s)",
            summary.applied,
            summary.rejected,
            summary.snapshots
        );
        Ok(summary)
    }

    fn slot(&self, post_id: &PostId) -> Option<Arc<PostSlot>> {
        self.posts.read().get(post_id).cloned()
    }

    fn slot_or_insert(&self, post_id: &PostId) -> Arc<PostSlot> {
        if let Some(slot) = self.slot(post_id) {
            return slot;
        }
        let mut posts = self.posts.write();
        Arc::clone(posts.entry(post_id.clone()).or_insert_with(|| Arc::new(PostSlot::new(post_id))))
    }

    /// Make the aggregator's state visible; snapshot if it moved
    ///
    /// Caller holds the slot's writer lock and has already checked `at`
    /// against the history.
    fn publish(
        &self,
        slot: &PostSlot,
        aggregator: &Aggregator,
        at: DateTime<Utc>,
        announce: Announce,
    ) -> Option<ConsensusSnapshot> {
        let tally = self.classifier.evaluate(aggregator.post_id(), aggregator.weights());

        let (snapshot, previous_tag) = {
            let mut published = slot.published.write();
            let previous = published.history.latest();
            let previous_tag = previous.map_or(CredibilityTag::Unverified, |s| s.tag);
            let changed = previous.is_none_or(|s| s.differs_from(&tally));

            let snapshot = if changed {
                let snapshot = ConsensusSnapshot::capture(&tally, at);
                if let Err(e) = published.history.append(snapshot.clone()) {
                    log::warn!("dropping snapshot for post {}: {e}", tally.post_id);
                    None
                } else {
                    Some(snapshot)
                }
            } else {
                None
            };
            published.tally = tally;
            (snapshot, previous_tag)
        };

        if announce == Announce::Yes
            && let Some(snapshot) = &snapshot
            && snapshot.tag != previous_tag
        {
            let change = TagChange {
                post_id: snapshot.post_id.clone(),
                from: previous_tag,
                to: snapshot.tag,
                consensus_percentage: snapshot.consensus_percentage,
                at: snapshot.captured_at,
            };
            log::debug!(
                "post {} moved from {} to {} at {}%",
                change.post_id,
                change.from,
                change.to,
                change.consensus_percentage
            );
            if let Some(notifier) = &self.notifier {
                notifier.tag_changed(&change);
            }
        }

        snapshot
    }
}
