//! Poll cursor
//!
//! Marks the instant after which the review service should report changes.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Unix timestamp (seconds) used as the `from_date` of a status query
///
/// Lives only in memory: a restarted bot polls from "now" again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PollCursor(i64);

impl PollCursor {
    pub fn new(timestamp: i64) -> Self {
        Self(timestamp)
    }

    /// Cursor pointing at the current wall-clock second
    pub fn now() -> Self {
        Self(Utc::now().timestamp())
    }

    pub fn timestamp(&self) -> i64 {
        self.0
    }
}

impl From<i64> for PollCursor {
    fn from(timestamp: i64) -> Self {
        Self(timestamp)
    }
}

impl std::fmt::Display for PollCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
