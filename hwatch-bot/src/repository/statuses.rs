//! Statuses repository
//!
//! Queries the review service for homework status changes.

use async_trait::async_trait;
use hwatch_client::{PracticumClient, Result};
use hwatch_core::domain::cursor::PollCursor;

/// Repository trait for homework status queries
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Fetches statuses changed after `cursor`
    ///
    /// Returns the decoded but unvalidated response body.
    async fn fetch_statuses(&self, cursor: PollCursor) -> Result<serde_json::Value>;
}

#[async_trait]
impl StatusRepository for PracticumClient {
    async fn fetch_statuses(&self, cursor: PollCursor) -> Result<serde_json::Value> {
        self.homework_statuses(cursor).await
    }
}
