//! Activity log entries.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of stock mutation recorded in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Added,
    Removed,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Removed => "Removed",
        }
    }
}

/// A single append-only record of a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// When the mutation happened
    pub timestamp: DateTime<Utc>,

    /// What happened
    pub action: Action,

    /// Item affected
    pub item: String,

    /// Units added or removed
    pub quantity: u64,
}

impl LogEntry {
    pub fn new(action: Action, item: impl Into<String>, quantity: u64) -> Self {
        Self {
            timestamp: Utc::now(),
            action,
            item: item.into(),
            quantity,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Renders the textual log line, e.g. `2024-05-01T10:00:00+00:00: Added 10 of apple`.
impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} of {}",
            self.timestamp.to_rfc3339(),
            self.action.as_str(),
            self.quantity,
            self.item
        )
    }
}
