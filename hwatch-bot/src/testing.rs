//! In-memory repositories for tests

use async_trait::async_trait;
use hwatch_client::{ClientError, Result};
use hwatch_core::domain::cursor::PollCursor;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::repository::{MessageRepository, StatusRepository};

/// Replays queued responses; answers with an empty list once they run out
#[derive(Default)]
pub struct FakeStatuses {
    responses: Mutex<VecDeque<Result<Value>>>,
    cursors: Mutex<Vec<PollCursor>>,
}

impl FakeStatuses {
    pub fn with_responses(responses: impl IntoIterator<Item = Result<Value>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            cursors: Mutex::new(Vec::new()),
        }
    }

    /// Cursors of every fetch so far, in call order
    pub fn cursors(&self) -> Vec<PollCursor> {
        self.cursors.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatusRepository for FakeStatuses {
    async fn fetch_statuses(&self, cursor: PollCursor) -> Result<Value> {
        self.cursors.lock().unwrap().push(cursor);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(json!({"homeworks": []})))
    }
}

/// Records delivered messages, or rejects every one of them
#[derive(Default)]
pub struct FakeMessages {
    fail: bool,
    attempts: Mutex<usize>,
    sent: Mutex<Vec<String>>,
}

impl FakeMessages {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl MessageRepository for FakeMessages {
    async fn send(&self, text: &str) -> Result<()> {
        *self.attempts.lock().unwrap() += 1;
        if self.fail {
            return Err(ClientError::NotificationFailure(
                "Bad Request: chat not found".to_string(),
            ));
        }
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
