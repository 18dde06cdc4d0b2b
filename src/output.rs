//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::core::models::{ConsensusSnapshot, CredibilityTag, Tally, Trend};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Colour a tag the way the feed shows it
fn tag_label(tag: CredibilityTag) -> ColoredString {
    let label = tag.to_string();
    match tag {
        CredibilityTag::True => label.green(),
        CredibilityTag::False => label.red(),
        CredibilityTag::Misleading => label.yellow(),
        CredibilityTag::Unverified => label.dimmed(),
    }
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Result of a submit or retract
#[derive(Debug, Serialize)]
pub struct ReviewResult {
    /// "submitted" or "retracted"
    pub action: String,
    /// The post reviewed
    pub post_id: String,
    /// The reviewer
    pub reviewer_id: String,
    /// Verdict submitted (absent for retractions)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<String>,
    /// Weight submitted (absent for retractions)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Tally after the change
    pub tally: Tally,
    /// Snapshot recorded by this change, if consensus moved
    pub snapshot: Option<ConsensusSnapshot>,
}

impl ReviewResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        match (&self.verdict, self.weight) {
            (Some(verdict), Some(weight)) => println!(
                "Recorded {verdict} from {} on {} (weight {weight})",
                self.reviewer_id, self.post_id
            ),
            _ => println!("Retracted review by {} on {}", self.reviewer_id, self.post_id),
        }

        println!(
            "Consensus: {}% {}",
            self.tally.consensus_percentage,
            tag_label(self.tally.tag)
        );

        if self.snapshot.is_some() {
            println!("Snapshot recorded.");
        } else {
            println!("No change in consensus.");
        }
    }
}

/// Result of a tally query
#[derive(Debug, Serialize)]
pub struct TallyResult {
    /// Whether the post has any recorded history
    pub found: bool,
    /// Current tally (zero state when not found)
    pub tally: Tally,
}

impl TallyResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if !self.found {
            println!("No reviews for {}.", self.tally.post_id);
            return;
        }

        let t = &self.tally;
        println!("Post: {}", t.post_id);
        println!("  Tag:         {}", tag_label(t.tag));
        println!("  Consensus:   {}%", t.consensus_percentage);
        println!("  Accurate:    {}", t.accurate_weight);
        println!("  Inaccurate:  {}", t.inaccurate_weight);
        println!("  Reviewers:   {}", t.reviewer_count);
    }
}

/// Result of a history query
#[derive(Debug, Serialize)]
pub struct HistoryResult {
    /// The post
    pub post_id: String,
    /// Snapshots, newest first
    pub snapshots: Vec<ConsensusSnapshot>,
}

impl HistoryResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if self.snapshots.is_empty() {
            println!("No history for {}.", self.post_id);
            return;
        }

        println!("History for {} (newest first):\n", self.post_id);
        for s in &self.snapshots {
            println!(
                "  {}  {:>3}%  {}",
                s.captured_at.to_rfc3339(),
                s.consensus_percentage,
                tag_label(s.tag)
            );
        }
    }
}

/// Result of a trend query
#[derive(Debug, Serialize)]
pub struct TrendResult {
    /// The post
    pub post_id: String,
    /// Direction between the two latest snapshots
    pub trend: Option<Trend>,
    /// Current rounded percentage
    pub consensus_percentage: u8,
}

impl TrendResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match self.trend {
                Some(trend) => println!(
                    "{}: {trend} (now {}%)",
                    self.post_id, self.consensus_percentage
                ),
                None => println!("{}: not enough history for a trend", self.post_id),
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
