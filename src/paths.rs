//! Centralized path definitions for credence
//!
//! ## Storage Layout
//!
//! ### Per-Project (working directory)
//!
//! ```text
//! ./
//! └── .credence/
//!     ├── config.toml        # Classifier thresholds, history defaults
//!     └── journal.jsonl      # Accepted review events, one per line
//! ```
//!
//! ### Global (User-Level)
//!
//! ```text
//! ~/.credence/
//! └── config.toml            # Fallback when the project has no config
//! ```

use std::path::PathBuf;

/// Directory name for local credence state
pub const CREDENCE_DIR: &str = ".credence";

/// Config filename (project and global)
const CONFIG_FILE: &str = "config.toml";

/// Review journal filename
const JOURNAL_FILE: &str = "journal.jsonl";

/// Get the project root directory.
#[must_use]
pub fn project_root() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Get path to `.credence/` state directory.
#[must_use]
pub fn credence_dir() -> PathBuf {
    project_root().join(CREDENCE_DIR)
}

/// Get path to `.credence/config.toml`.
#[must_use]
pub fn project_config() -> PathBuf {
    credence_dir().join(CONFIG_FILE)
}

/// Get path to `.credence/journal.jsonl`.
///
/// Every accepted submission and retraction is appended here and replayed
/// on startup.
#[must_use]
pub fn journal() -> PathBuf {
    credence_dir().join(JOURNAL_FILE)
}

/// Global config directory name
const GLOBAL_DIR: &str = ".credence";

/// Get the global credence directory.
///
/// Returns `~/.credence/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.credence/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}
