//! Tally command - current consensus for a post

use credence::core::models::{PostId, Tally};
use credence::output::{OutputMode, TallyResult};

use crate::cli::session::{Session, SessionPaths};

/// Show the tally; an unreviewed post is reported as the zero state
pub fn tally(paths: &SessionPaths, post: &str, mode: OutputMode) -> anyhow::Result<()> {
    let session = Session::open(paths)?;
    let post_id = PostId::new(post);

    let result = match session.engine.get_tally(&post_id) {
        Ok(tally) => TallyResult { found: true, tally },
        Err(e) if e.is_not_found() => TallyResult {
            found: false,
            tally: Tally::empty(post_id),
        },
        Err(e) => return Err(e.into()),
    };

    result.render(mode);
    Ok(())
}
