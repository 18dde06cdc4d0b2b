//! Integration tests for the credence CLI
//!
//! These tests drive the binary in a scratch directory, testing the full
//! cycle of: init → submit → tally → history, with the journal carrying
//! state between invocations.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create a credence command rooted in `dir`
fn credence(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("credence"));
    cmd.current_dir(dir).env("HOME", dir).env("NO_COLOR", "1");
    cmd
}

/// Helper to submit a verdict at a fixed offset from a base time
fn submit(dir: &Path, post: &str, reviewer: &str, verdict: &str, weight: &str, minute: u32) {
    credence(dir)
        .args([
            "submit",
            post,
            reviewer,
            verdict,
            "--weight",
            weight,
            "--at",
            &format!("2024-05-01T12:{minute:02}:00Z"),
        ])
        .assert()
        .success();
}

// =============================================================================
// END-TO-END WORKFLOW TESTS
// =============================================================================

/// Test complete workflow: init → submit → tally → history
#[test]
fn test_e2e_complete_workflow() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    // Step 1: Initialize
    credence(dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(dir.join(".credence/config.toml").exists());

    // Step 2: Two reviewers disagree
    submit(dir, "post-1", "alice", "accurate", "3", 0);
    credence(dir)
        .args(["submit", "post-1", "bob", "inaccurate", "-w", "2", "--at", "2024-05-01T12:01:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded inaccurate from bob"))
        .stdout(predicate::str::contains("Consensus: 60% misleading"))
        .stdout(predicate::str::contains("Snapshot recorded."));

    // Step 3: Tally survives across invocations via the journal
    credence(dir)
        .args(["tally", "post-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("misleading"))
        .stdout(predicate::str::contains("60%"))
        .stdout(predicate::str::contains("Reviewers:   2"));

    // Step 4: History is newest first
    let output = credence(dir).args(["history", "post-1"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let misleading = stdout.find("misleading").unwrap();
    let unverified = stdout.find("unverified").unwrap();
    assert!(misleading < unverified);

    // Journal holds exactly the two accepted events
    let journal = fs::read_to_string(dir.join(".credence/journal.jsonl")).unwrap();
    assert_eq!(journal.lines().count(), 2);
}

/// A reviewer flipping their verdict replaces, not adds
#[test]
fn test_reviewer_flip() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    submit(dir, "post-1", "alice", "accurate", "10", 0);
    credence(dir)
        .args(["--json", "submit", "post-1", "alice", "inaccurate", "-w", "10", "--at", "2024-05-01T12:05:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tag\": \"false\""))
        .stdout(predicate::str::contains("\"reviewer_count\": 1"));

    credence(dir)
        .args(["trend", "post-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("falling"));
}

/// Tag changes are announced once, not again on every journal replay
#[test]
fn test_tag_change_announced_once() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    credence(dir)
        .env_remove("RUST_LOG")
        .args(["submit", "post-1", "alice", "accurate", "-w", "10", "--at", "2024-05-01T12:00:00Z"])
        .assert()
        .success()
        .stderr(predicate::str::contains("tag change post=post-1"));

    credence(dir)
        .env_remove("RUST_LOG")
        .args(["tally", "post-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tag:         true"))
        .stderr(predicate::str::contains("tag change").not());

    credence(dir)
        .env_remove("RUST_LOG")
        .args(["submit", "post-1", "bob", "accurate", "-w", "1", "--at", "2024-05-01T12:01:00Z"])
        .assert()
        .success()
        .stderr(predicate::str::contains("tag change").not());
}

/// Resubmitting the same verdict reports no change
#[test]
fn test_duplicate_submission_reports_no_change() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    submit(dir, "post-1", "alice", "accurate", "1", 0);
    credence(dir)
        .args(["submit", "post-1", "alice", "accurate", "--at", "2024-05-01T12:01:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No change in consensus."));
}

/// Retraction removes the reviewer's weight
#[test]
fn test_retract() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    submit(dir, "post-1", "alice", "accurate", "3", 0);
    submit(dir, "post-1", "bob", "inaccurate", "3", 1);

    credence(dir)
        .args(["retract", "post-1", "bob", "--at", "2024-05-01T12:02:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Retracted review by bob"))
        .stdout(predicate::str::contains("Consensus: 100% unverified"));

    credence(dir)
        .args(["retract", "post-1", "bob", "--at", "2024-05-01T12:03:00Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

// =============================================================================
// ERROR HANDLING TESTS
// =============================================================================

#[test]
fn test_unknown_verdict_fails() {
    let temp = TempDir::new().unwrap();
    credence(temp.path())
        .args(["submit", "post-1", "alice", "maybe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown verdict"));
}

#[test]
fn test_negative_weight_fails_and_is_not_journaled() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    credence(dir)
        .args(["submit", "post-1", "alice", "accurate", "--weight", "-2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid review record"));

    assert!(!dir.join(".credence/journal.jsonl").exists());
}

#[test]
fn test_out_of_order_fails() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    submit(dir, "post-1", "alice", "accurate", "1", 30);
    credence(dir)
        .args(["submit", "post-1", "bob", "accurate", "--at", "2024-05-01T12:00:00Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out-of-order"));
}

#[test]
fn test_tally_for_unknown_post() {
    let temp = TempDir::new().unwrap();
    credence(temp.path())
        .args(["tally", "post-404"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No reviews for post-404."));

    credence(temp.path())
        .args(["--json", "tally", "post-404"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"found\": false"));
}

// =============================================================================
// CONFIGURATION TESTS
// =============================================================================

#[test]
fn test_custom_thresholds_from_config() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    fs::write(
        dir.join("strict.toml"),
        "[thresholds]\nmin_review_weight = 1.0\ntrue_threshold = 90\nfalse_threshold = 10\n",
    )
    .unwrap();

    credence(dir)
        .args(["--config", "strict.toml", "submit", "post-1", "alice", "accurate", "-w", "8", "--at", "2024-05-01T12:00:00Z"])
        .assert()
        .success();
    credence(dir)
        .args(["--config", "strict.toml", "submit", "post-1", "bob", "inaccurate", "-w", "2", "--at", "2024-05-01T12:01:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Consensus: 80% misleading"));
}

#[test]
fn test_invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    fs::write(dir.join("bad.toml"), "[thresholds]\ntrue_threshold = 20\n").unwrap();

    credence(dir)
        .args(["--config", "bad.toml", "tally", "post-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn test_init_twice_requires_force() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    credence(dir).arg("init").assert().success();
    credence(dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));
    credence(dir)
        .args(["init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
}

#[test]
fn test_history_limit() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    submit(dir, "post-1", "alice", "accurate", "3", 0);
    submit(dir, "post-1", "bob", "inaccurate", "3", 1);
    submit(dir, "post-1", "carol", "accurate", "3", 2);

    let output = credence(dir)
        .args(["--json", "history", "post-1", "--limit", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let snapshots = value["snapshots"].as_array().unwrap();
    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[0]["consensus_percentage"], 67);
    assert_eq!(snapshots[1]["consensus_percentage"], 50);
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    credence(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("credence v"));
}
