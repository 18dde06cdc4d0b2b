//! Reviewer verdicts

use serde::{Deserialize, Serialize};

use crate::error::ConsensusError;

/// A reviewer's judgement of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The post is accurate
    Accurate,
    /// The post is inaccurate
    Inaccurate,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accurate => write!(f, "accurate"),
            Self::Inaccurate => write!(f, "inaccurate"),
        }
    }
}

impl std::str::FromStr for Verdict {
    type Err = ConsensusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "accurate" => Ok(Self::Accurate),
            "inaccurate" => Ok(Self::Inaccurate),
            _ => Err(ConsensusError::InvalidRecord(format!(
                "unknown verdict: {s}. Use: accurate, inaccurate"
            ))),
        }
    }
}
