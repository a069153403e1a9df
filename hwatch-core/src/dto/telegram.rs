//! Telegram Bot API DTOs

use serde::{Deserialize, Serialize};

/// Body of a `sendMessage` call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessage {
    /// Target chat identifier (numeric id or `@channel` name)
    pub chat_id: String,

    /// Plain message text
    pub text: String,
}

/// Envelope every Bot API method replies with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramReply {
    pub ok: bool,

    #[serde(default)]
    pub description: Option<String>,
}
