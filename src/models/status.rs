//! Item status enumeration
//!
//! The lifecycle state of a bucket-list item. Stored as the kebab-case
//! strings the data files use ("want", "in-progress", "done").

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Still on the wish list (default)
    #[default]
    Want,
    /// Actively being pursued
    InProgress,
    /// Achieved
    Done,
}

impl Status {
    /// All statuses in display order
    pub fn all() -> &'static [Self] {
        &[Self::Want, Self::InProgress, Self::Done]
    }

    /// The serialized identifier for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Want => "want",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "want" => Ok(Self::Want),
            "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            other => Err(format!("unknown status: {}", other)),
        }
    }
}
