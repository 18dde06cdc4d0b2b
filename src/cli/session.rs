//! Session wiring - config, journal and a replayed engine

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use credence::adapters::{JsonlJournal, LogNotifier};
use credence::config::CredenceConfig;
use credence::core::models::ReviewEvent;
use credence::core::ports::ReviewJournal;
use credence::engine::ConsensusEngine;
use credence::paths;

/// Paths given on the command line
#[derive(Debug, Clone, Default)]
pub struct SessionPaths {
    /// Explicit config file
    pub config: Option<PathBuf>,
    /// Explicit journal file
    pub journal: Option<PathBuf>,
}

impl SessionPaths {
    /// Where `init` writes the config
    pub fn config_target(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(paths::project_config)
    }

    fn journal_path(&self) -> PathBuf {
        self.journal.clone().unwrap_or_else(paths::journal)
    }
}

/// A loaded config plus an engine rebuilt from the journal
#[derive(Debug)]
pub struct Session {
    /// Config in effect
    pub config: CredenceConfig,
    /// Engine holding every journaled event
    pub engine: ConsensusEngine,
    journal: JsonlJournal,
}

impl Session {
    /// Resolve config, open the journal and replay it
    pub fn open(paths: &SessionPaths) -> anyhow::Result<Self> {
        let (config, _source) = CredenceConfig::resolve(paths.config.as_deref())?;
        let engine =
            ConsensusEngine::new(config.classifier()?).with_notifier(Arc::new(LogNotifier));

        let journal = JsonlJournal::new(paths.journal_path());
        let summary = engine.restore(&journal)?;
        if summary.rejected > 0 {
            log::warn!(
                "{} journaled event(s) in {} were rejected on replay",
                summary.rejected,
                journal.path().display()
            );
        }

        Ok(Self {
            config,
            engine,
            journal,
        })
    }

    /// Persist an event the engine has accepted
    pub fn record(&self, event: &ReviewEvent) -> anyhow::Result<()> {
        self.journal.append(event)
    }
}

/// Parse an RFC 3339 timestamp, defaulting to now
pub fn parse_time(at: Option<&str>) -> anyhow::Result<DateTime<Utc>> {
    at.map_or_else(
        || Ok(Utc::now()),
        |s| {
            DateTime::parse_from_rfc3339(s)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|e| anyhow::anyhow!("invalid timestamp '{s}': {e}"))
        },
    )
}
