//! Telegram Bot API

use hwatch_core::dto::telegram::{SendMessage, TelegramReply};
use reqwest::Client;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Public Bot API host
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// HTTP client for the Telegram Bot API
#[derive(Clone)]
pub struct TelegramClient {
    /// Bot API base URL (e.g., "https://api.telegram.org")
    api_url: String,
    /// Bot token; part of every method URL
    token: String,
    /// HTTP client instance
    client: Client,
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

impl TelegramClient {
    /// Create a new Telegram client
    ///
    /// # Arguments
    /// * `api_url` - Bot API base URL
    /// * `token` - Bot token issued by @BotFather
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(api_url, token, Client::new())
    }

    /// Create a new Telegram client with a custom HTTP client
    pub fn with_client(
        api_url: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the Bot API base URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Send a plain text message to a chat
    ///
    /// The reply is only checked for acceptance; the sent message itself is
    /// not returned.
    ///
    /// # Errors
    /// [`ClientError::NotificationFailure`] when the request fails or Telegram
    /// answers with `"ok": false`. Error texts never contain the bot token.
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.token);
        debug!("Sending Telegram message to chat {}", chat_id);

        let response = self
            .client
            .post(&url)
            .json(&SendMessage {
                chat_id: chat_id.to_string(),
                text: text.to_string(),
            })
            .send()
            .await
            .map_err(|e| ClientError::NotificationFailure(e.without_url().to_string()))?;

        let status = response.status();
        let reply = response.json::<TelegramReply>().await.ok();

        match reply {
            Some(reply) if status.is_success() && reply.ok => Ok(()),
            Some(reply) => Err(ClientError::NotificationFailure(
                reply
                    .description
                    .unwrap_or_else(|| format!("status {}", status)),
            )),
            None => Err(ClientError::NotificationFailure(format!(
                "unexpected reply (status {})",
                status
            ))),
        }
    }
}
