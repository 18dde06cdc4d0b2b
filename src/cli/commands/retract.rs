//! Retract command - withdraw a reviewer's verdict

use credence::core::models::{PostId, ReviewEvent, ReviewerId};
use credence::output::{OutputMode, ReviewResult};

use crate::cli::session::{Session, SessionPaths, parse_time};

/// Withdraw a verdict, journaling the retraction if accepted
pub fn retract(
    paths: &SessionPaths,
    post: &str,
    reviewer: &str,
    at: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let at = parse_time(at)?;
    let post_id = PostId::new(post);
    let reviewer_id = ReviewerId::new(reviewer);

    let session = Session::open(paths)?;
    let snapshot = session.engine.retract(&post_id, &reviewer_id, at)?;
    session.record(&ReviewEvent::Retracted {
        post_id: post_id.clone(),
        reviewer_id: reviewer_id.clone(),
        at,
    })?;

    ReviewResult {
        action: "retracted".to_string(),
        post_id: post_id.to_string(),
        reviewer_id: reviewer_id.to_string(),
        verdict: None,
        weight: None,
        tally: session.engine.tally_or_empty(&post_id),
        snapshot,
    }
    .render(mode);
    Ok(())
}
