//! Review service DTOs

use serde::{Deserialize, Serialize};

use crate::domain::cursor::PollCursor;

/// Query string of the homework status endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusQuery {
    /// Only changes after this Unix timestamp are returned
    pub from_date: i64,
}

impl From<PollCursor> for StatusQuery {
    fn from(cursor: PollCursor) -> Self {
        StatusQuery {
            from_date: cursor.timestamp(),
        }
    }
}
