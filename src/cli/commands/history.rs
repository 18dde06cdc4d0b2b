//! History command - consensus snapshots for a post

use credence::core::models::PostId;
use credence::output::{HistoryResult, OutputMode};

use crate::cli::session::{Session, SessionPaths};

/// Show up to `limit` snapshots, newest first
pub fn history(
    paths: &SessionPaths,
    post: &str,
    limit: Option<usize>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let session = Session::open(paths)?;
    let limit = limit.unwrap_or(session.config.history.default_limit);
    let post_id = PostId::new(post);

    let snapshots = session.engine.recent(&post_id, limit).iter().cloned().collect();

    HistoryResult {
        post_id: post_id.to_string(),
        snapshots,
    }
    .render(mode);
    Ok(())
}
