//! Error types for the hwatch clients
//!
//! The `Display` text of every variant is operator-facing: the bot forwards
//! it to the chat verbatim, so it is written in Russian.

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the review service or Telegram
#[derive(Debug, Error)]
pub enum ClientError {
    /// DNS failure, refused or reset connection, timeout
    #[error("Сбой при запросе к эндпоинту: {0}")]
    Transport(#[from] reqwest::Error),

    /// The review service answered with something other than 200 OK
    #[error("Эндпоинт недоступен. Код ответа API: {status}")]
    EndpointUnavailable {
        /// HTTP status code
        status: u16,
    },

    /// The response body is not valid JSON
    #[error("Ошибка при преобразовании ответа API: {0}")]
    MalformedResponse(String),

    /// Telegram did not accept the message
    #[error("Сообщение в Telegram не отправлено: {0}")]
    NotificationFailure(String),
}
