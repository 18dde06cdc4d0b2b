//! Append-only JSON-lines journal of accepted review events

use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::core::models::ReviewEvent;
use crate::core::ports::ReviewJournal;

/// Review journal stored as a `.jsonl` file
#[derive(Debug, Clone)]
pub struct JsonlJournal {
    path: PathBuf,
}

impl JsonlJournal {
    /// Journal at `path` (created on first append)
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Journal file location
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReviewJournal for JsonlJournal {
    fn append(&self, event: &ReviewEvent) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut line = serde_json::to_string(event)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening journal {}", self.path.display()))?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    fn load(&self) -> anyhow::Result<Vec<ReviewEvent>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = fs::File::open(&self.path)
            .with_context(|| format!("opening journal {}", self.path.display()))?;

        let mut events = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let event = serde_json::from_str(&line).with_context(|| {
                format!("{}:{}: malformed journal entry", self.path.display(), index + 1)
            })?;
            events.push(event);
        }
        Ok(events)
    }
}
