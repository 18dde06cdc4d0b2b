//! Trend command

use credence::core::models::PostId;
use credence::output::{OutputMode, TrendResult};

use crate::cli::session::{Session, SessionPaths};

/// Show the direction of the latest consensus move
pub fn trend(paths: &SessionPaths, post: &str, mode: OutputMode) -> anyhow::Result<()> {
    let session = Session::open(paths)?;
    let post_id = PostId::new(post);

    TrendResult {
        trend: session.engine.trend(&post_id),
        consensus_percentage: session.engine.tally_or_empty(&post_id).consensus_percentage,
        post_id: post_id.to_string(),
    }
    .render(mode);
    Ok(())
}
