//! Messages repository
//!
//! Delivers text messages to the operator chat.

use async_trait::async_trait;
use hwatch_client::{Result, TelegramClient};

/// Repository trait for operator chat messages
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Sends a plain text message
    async fn send(&self, text: &str) -> Result<()>;
}

/// Telegram implementation of MessageRepository bound to one chat
pub struct TelegramMessageRepository {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramMessageRepository {
    /// Creates a new Telegram message repository
    ///
    /// # Arguments
    /// * `client` - Bot API client carrying the bot token
    /// * `chat_id` - Chat that receives every message
    pub fn new(client: TelegramClient, chat_id: String) -> Self {
        Self { client, chat_id }
    }
}

#[async_trait]
impl MessageRepository for TelegramMessageRepository {
    async fn send(&self, text: &str) -> Result<()> {
        self.client.send_message(&self.chat_id, text).await
    }
}
