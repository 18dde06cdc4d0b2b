//! Initialize credence in the working directory

use credence::config::CredenceConfig;
use credence::output::{OperationResult, OutputMode};

use crate::cli::session::SessionPaths;

/// Write the default config
pub fn init(paths: &SessionPaths, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let target = paths.config_target();

    if target.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists).\nUse --force to reinitialize.",
                target.display()
            ),
        }
        .render(mode);
        return Ok(());
    }

    CredenceConfig::default().save_to(&target)?;
    log::debug!("wrote default config to {}", target.display());

    OperationResult {
        success: true,
        message: format!("Created {}", target.display()),
    }
    .render(mode);
    Ok(())
}
