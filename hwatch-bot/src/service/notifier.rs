//! Notifier service
//!
//! Best-effort delivery of operator messages. A failed delivery is logged
//! and swallowed; it never interrupts the poll loop.

use chrono::{DateTime, TimeZone};
use std::sync::Arc;
use tracing::{error, info};

use crate::repository::MessageRepository;

/// Delivers messages to the operator chat
#[derive(Clone)]
pub struct Notifier {
    messages: Arc<dyn MessageRepository>,
}

impl Notifier {
    /// Creates a new notifier
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }

    /// Sends `message`, logging the outcome instead of returning it
    pub async fn notify(&self, message: &str) {
        match self.messages.send(message).await {
            Ok(()) => info!("Telegram message sent: {}", message),
            Err(e) => error!("Telegram message not sent: {}", e),
        }
    }
}

/// Announcement sent once the bot has started
pub fn startup_message<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("Я начал свою работу: {}", now.format("%d-%m-%Y %H:%M"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeMessages;
    use chrono::Utc;

    #[tokio::test]
    async fn test_notify_delivers_message() {
        let messages = Arc::new(FakeMessages::default());
        let notifier = Notifier::new(messages.clone());

        notifier.notify("hello").await;

        assert_eq!(messages.sent(), vec!["hello".to_string()]);
    }

    #[tokio::test]
    async fn test_notify_swallows_delivery_failure() {
        let messages = Arc::new(FakeMessages::failing());
        let notifier = Notifier::new(messages.clone());

        // Must return normally
        notifier.notify("hello").await;

        assert_eq!(messages.attempts(), 1);
        assert!(messages.sent().is_empty());
    }

    #[test]
    fn test_startup_message_format() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 9, 7, 0).unwrap();
        assert_eq!(startup_message(&now), "Я начал свою работу: 05-03-2024 09:07");
    }
}
