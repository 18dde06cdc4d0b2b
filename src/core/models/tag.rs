//! Credibility tags
//!
//! The discrete label rendered next to a post.

use serde::{Deserialize, Serialize};

/// Credibility tag derived from consensus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredibilityTag {
    /// Reviewers broadly agree the post is accurate
    True,
    /// Reviewers broadly agree the post is inaccurate
    False,
    /// Not enough review weight to decide
    #[default]
    Unverified,
    /// Contested: neither clearly accurate nor inaccurate
    Misleading,
}

impl CredibilityTag {
    /// Whether the tag settles the question one way or the other
    #[must_use]
    pub const fn is_decisive(self) -> bool {
        matches!(self, Self::True | Self::False)
    }
}

impl std::fmt::Display for CredibilityTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::Unverified => write!(f, "unverified"),
            Self::Misleading => write!(f, "misleading"),
        }
    }
}

impl std::str::FromStr for CredibilityTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "true" => Ok(Self::True),
            "false" => Ok(Self::False),
            "unverified" => Ok(Self::Unverified),
            "misleading" => Ok(Self::Misleading),
            _ => Err(format!(
                "Invalid credibility tag: {s}. Use: true, false, unverified, misleading"
            )),
        }
    }
}
