//! Configuration management
//!
//! Thresholds and history defaults are read from TOML:
//!
//! ```toml
//! [thresholds]
//! min_review_weight = 5.0
//! true_threshold = 70
//! false_threshold = 30
//!
//! [history]
//! default_limit = 10
//! ```
//!
//! Resolution order: an explicit path, then `.credence/config.toml` in the
//! working directory, then `~/.credence/config.toml`, then built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::Thresholds;
use crate::core::services::TagClassifier;
use crate::paths;

/// Top-level credence configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CredenceConfig {
    /// Tag classifier thresholds
    #[serde(default)]
    pub thresholds: Thresholds,
    /// History display settings
    #[serde(default)]
    pub history: HistoryConfig,
}

/// History display settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Snapshots shown when no limit is given
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

const fn default_limit() -> usize {
    10
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

impl CredenceConfig {
    /// Parse and validate a config from TOML text
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.thresholds.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("in config {}", path.display()))
    }

    /// Resolve the config in effect
    ///
    /// Returns the config and the file it came from (`None` for defaults).
    /// An explicit path must exist; discovered files are optional.
    pub fn resolve(explicit: Option<&Path>) -> anyhow::Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load_from(path)?, Some(path.to_path_buf())));
        }

        for candidate in [paths::project_config(), paths::global_config()] {
            if candidate.exists() {
                log::debug!("using config {}", candidate.display());
                return Ok((Self::load_from(&candidate)?, Some(candidate)));
            }
        }

        log::debug!("no config file found, using defaults");
        Ok((Self::default(), None))
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Build the tag classifier these thresholds describe
    pub fn classifier(&self) -> crate::error::Result<TagClassifier> {
        TagClassifier::new(self.thresholds)
    }
}
