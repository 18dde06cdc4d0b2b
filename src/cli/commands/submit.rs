//! Submit command - record a reviewer's verdict

use credence::core::models::{DEFAULT_REVIEWER_WEIGHT, ReviewEvent, ReviewRecord, Verdict};
use credence::output::{OutputMode, ReviewResult};

use crate::cli::session::{Session, SessionPaths, parse_time};

/// Arguments for `credence submit`
#[derive(Debug)]
pub struct SubmitArgs<'a> {
    /// Post ID
    pub post: &'a str,
    /// Reviewer ID
    pub reviewer: &'a str,
    /// Raw verdict string
    pub verdict: &'a str,
    /// Reviewer weight
    pub weight: Option<f64>,
    /// RFC 3339 submission time
    pub at: Option<&'a str>,
}

/// Submit or replace a verdict, journaling it if accepted
pub fn submit(paths: &SessionPaths, args: &SubmitArgs<'_>, mode: OutputMode) -> anyhow::Result<()> {
    let verdict: Verdict = args.verdict.parse()?;
    let submitted_at = parse_time(args.at)?;
    let weight = args.weight.unwrap_or(DEFAULT_REVIEWER_WEIGHT);

    let record = ReviewRecord::new(args.post.into(), args.reviewer.into(), verdict, submitted_at)
        .with_weight(weight);

    let session = Session::open(paths)?;
    let snapshot = session.engine.submit(record.clone())?;
    session.record(&ReviewEvent::Submitted(record.clone()))?;

    ReviewResult {
        action: "submitted".to_string(),
        post_id: record.post_id.to_string(),
        reviewer_id: record.reviewer_id.to_string(),
        verdict: Some(verdict.to_string()),
        weight: Some(weight),
        tally: session.engine.tally_or_empty(&record.post_id),
        snapshot,
    }
    .render(mode);
    Ok(())
}
