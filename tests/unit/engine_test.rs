//! Tests for the consensus engine
//!
//! Covers the documented scenarios end to end through the public API.

use std::sync::{Arc, Mutex};

use credence::core::models::{CredibilityTag, PostId, TagChange, Thresholds, Trend, Verdict};
use credence::core::ports::TagChangeNotifier;
use credence::core::services::TagClassifier;
use credence::{ConsensusEngine, ConsensusError};

use crate::common::{accurate, at, inaccurate};

/// Notifier that remembers every change it sees
#[derive(Default)]
struct RecordingNotifier {
    changes: Mutex<Vec<TagChange>>,
}

impl TagChangeNotifier for RecordingNotifier {
    fn tag_changed(&self, change: &TagChange) {
        self.changes.lock().unwrap().push(change.clone());
    }
}

// =============================================================================
// DOCUMENTED SCENARIOS
// =============================================================================

#[test]
fn test_mixed_review_is_misleading() {
    let engine = ConsensusEngine::default();
    engine.submit(accurate("post-1", "alice", 3.0, 0)).unwrap();
    engine.submit(inaccurate("post-1", "bob", 2.0, 1)).unwrap();

    let tally = engine.get_tally(&"post-1".into()).unwrap();
    assert!((tally.total_weight() - 5.0).abs() < f64::EPSILON);
    assert_eq!(tally.consensus_percentage, 60);
    assert_eq!(tally.tag, CredibilityTag::Misleading);
}

#[test]
fn test_reviewer_flip_records_one_transition() {
    let engine = ConsensusEngine::default();

    let first = engine.submit(accurate("post-1", "alice", 10.0, 0)).unwrap().unwrap();
    assert_eq!(first.consensus_percentage, 100);
    assert_eq!(first.tag, CredibilityTag::True);

    let second = engine.submit(inaccurate("post-1", "alice", 10.0, 1)).unwrap().unwrap();
    assert_eq!(second.consensus_percentage, 0);
    assert_eq!(second.tag, CredibilityTag::False);

    let tally = engine.get_tally(&"post-1".into()).unwrap();
    assert_eq!(tally.reviewer_count, 1);
    assert!((tally.total_weight() - 10.0).abs() < f64::EPSILON);

    let history: Vec<_> = engine.recent(&"post-1".into(), 10).iter().cloned().collect();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].tag, CredibilityTag::False);
    assert_eq!(history[1].tag, CredibilityTag::True);
}

#[test]
fn test_identical_resubmission_changes_nothing() {
    let engine = ConsensusEngine::default();
    engine.submit(accurate("post-1", "alice", 3.0, 0)).unwrap();
    engine.submit(inaccurate("post-1", "bob", 2.0, 1)).unwrap();
    let before = engine.get_tally(&"post-1".into()).unwrap();

    let snapshot = engine.submit(inaccurate("post-1", "bob", 2.0, 2)).unwrap();
    assert!(snapshot.is_none());
    assert_eq!(engine.get_tally(&"post-1".into()).unwrap(), before);
    assert_eq!(engine.recent(&"post-1".into(), 10).len(), 2);
}

#[test]
fn test_tag_depends_only_on_final_records() {
    let fresh = ConsensusEngine::default();
    fresh.submit(accurate("post-1", "bob", 3.1, 0)).unwrap();
    fresh.submit(accurate("post-1", "alice", 1.9, 1)).unwrap();

    let churned = ConsensusEngine::default();
    churned.submit(accurate("post-1", "bob", 3.1, 0)).unwrap();
    for (secs, weight) in [(1, 2.1), (2, 3.0), (3, 0.5), (4, 0.1), (5, 3.0), (6, 1.6), (7, 1.9)] {
        churned.submit(accurate("post-1", "alice", weight, secs)).unwrap();
    }

    let expected = fresh.get_tally(&"post-1".into()).unwrap();
    let actual = churned.get_tally(&"post-1".into()).unwrap();
    assert_eq!(expected.tag, CredibilityTag::True);
    assert_eq!(actual, expected);
}

#[test]
fn test_no_reviews_is_not_found() {
    let engine = ConsensusEngine::default();
    let err = engine.get_tally(&"nobody-reviewed".into()).unwrap_err();
    assert!(matches!(err, ConsensusError::NotFound(_)));
    assert!(engine.recent(&"nobody-reviewed".into(), 5).is_empty());
    assert_eq!(engine.trend(&"nobody-reviewed".into()), None);
}

#[test]
fn test_negative_weight_rejected_without_side_effects() {
    let engine = ConsensusEngine::default();
    engine.submit(accurate("post-1", "alice", 6.0, 0)).unwrap();

    let err = engine.submit(inaccurate("post-1", "bob", -4.0, 1)).unwrap_err();
    assert!(matches!(err, ConsensusError::InvalidRecord(_)));

    let tally = engine.get_tally(&"post-1".into()).unwrap();
    assert_eq!(tally.reviewer_count, 1);
    assert_eq!(tally.tag, CredibilityTag::True);
}

#[test]
fn test_unknown_verdict_is_invalid_record() {
    let err = "probably".parse::<Verdict>().unwrap_err();
    assert!(matches!(err, ConsensusError::InvalidRecord(_)));
}

#[test]
fn test_out_of_order_rejected() {
    let engine = ConsensusEngine::default();
    engine.submit(accurate("post-1", "alice", 1.0, 100)).unwrap();
    let err = engine.submit(accurate("post-1", "bob", 1.0, 50)).unwrap_err();
    assert!(matches!(err, ConsensusError::OutOfOrder { .. }));
}

// =============================================================================
// RETRACTION, TREND, NOTIFICATION
// =============================================================================

#[test]
fn test_retract_and_trend() {
    let engine = ConsensusEngine::default();
    engine.submit(accurate("post-1", "alice", 3.0, 0)).unwrap();
    engine.submit(inaccurate("post-1", "bob", 3.0, 1)).unwrap();
    assert_eq!(engine.trend(&"post-1".into()), Some(Trend::Falling));

    engine.retract(&"post-1".into(), &"bob".into(), at(2)).unwrap();
    assert_eq!(engine.trend(&"post-1".into()), Some(Trend::Rising));

    let tally = engine.get_tally(&"post-1".into()).unwrap();
    assert_eq!(tally.reviewer_count, 1);
    assert_eq!(tally.consensus_percentage, 100);
}

#[test]
fn test_retract_everyone_keeps_history() {
    let engine = ConsensusEngine::default();
    engine.submit(accurate("post-1", "alice", 8.0, 0)).unwrap();
    engine.retract(&"post-1".into(), &"alice".into(), at(1)).unwrap();

    let tally = engine.get_tally(&"post-1".into()).unwrap();
    assert_eq!(tally.reviewer_count, 0);
    assert_eq!(tally.consensus_percentage, 0);
    assert_eq!(tally.tag, CredibilityTag::Unverified);
    assert_eq!(engine.recent(&"post-1".into(), 10).len(), 2);
}

#[test]
fn test_notifier_receives_transitions() {
    let notifier = Arc::new(RecordingNotifier::default());
    let engine = ConsensusEngine::default().with_notifier(notifier.clone());

    engine.submit(accurate("post-1", "alice", 2.0, 0)).unwrap();
    engine.submit(accurate("post-1", "bob", 4.0, 1)).unwrap();
    engine.submit(inaccurate("post-1", "carol", 6.0, 2)).unwrap();

    let changes = notifier.changes.lock().unwrap();
    let moves: Vec<_> = changes.iter().map(|c| (c.from, c.to)).collect();
    assert_eq!(
        moves,
        vec![
            (CredibilityTag::Unverified, CredibilityTag::True),
            (CredibilityTag::True, CredibilityTag::Misleading),
        ]
    );
    assert_eq!(changes[1].consensus_percentage, 50);
}

#[test]
fn test_custom_thresholds() {
    let classifier = TagClassifier::new(Thresholds {
        min_review_weight: 1.0,
        true_threshold: 90,
        false_threshold: 10,
    })
    .unwrap();
    let engine = ConsensusEngine::new(classifier);

    engine.submit(accurate("post-1", "alice", 8.0, 0)).unwrap();
    engine.submit(inaccurate("post-1", "bob", 2.0, 1)).unwrap();
    assert_eq!(engine.get_tally(&"post-1".into()).unwrap().tag, CredibilityTag::Misleading);
}

#[test]
fn test_posts_are_independent() {
    let engine = ConsensusEngine::default();
    engine.submit(accurate("post-1", "alice", 10.0, 50)).unwrap();
    // Earlier timestamp is fine on a different post
    engine.submit(inaccurate("post-2", "alice", 10.0, 0)).unwrap();

    assert_eq!(engine.get_tally(&"post-1".into()).unwrap().tag, CredibilityTag::True);
    assert_eq!(engine.get_tally(&"post-2".into()).unwrap().tag, CredibilityTag::False);
    assert_eq!(engine.post_ids(), vec![PostId::new("post-1"), PostId::new("post-2")]);
}

#[test]
fn test_readers_run_alongside_writer() {
    let engine = Arc::new(ConsensusEngine::default());
    engine.submit(accurate("post-1", "seed", 1.0, 0)).unwrap();

    let writer = {
        let engine = Arc::clone(&engine);
        std::thread::spawn(move || {
            for i in 0..200 {
                let reviewer = format!("r{i}");
                let record = if i % 2 == 0 {
                    accurate("post-1", &reviewer, 1.0, 0)
                } else {
                    inaccurate("post-1", &reviewer, 1.0, 0)
                };
                engine.submit(record).unwrap();
            }
        })
    };

    let reader = {
        let engine = Arc::clone(&engine);
        std::thread::spawn(move || {
            for _ in 0..200 {
                let tally = engine.get_tally(&"post-1".into()).unwrap();
                // Each reviewer weighs 1.0, so a torn update would show up here
                let expected = tally.reviewer_count as f64;
                assert!((tally.total_weight() - expected).abs() < 1e-9);
                assert!(tally.consensus_percentage <= 100);
            }
        })
    };

    writer.join().unwrap();
    reader.join().unwrap();
    assert_eq!(engine.get_tally(&"post-1".into()).unwrap().reviewer_count, 201);
}
