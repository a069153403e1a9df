//! Error types for the bot
//!
//! Everything a poll cycle can fail with. The `Display` text ends up in the
//! operator chat and is also what repeated failures are deduplicated on.

use hwatch_client::ClientError;
use thiserror::Error;

/// Failure of a single poll cycle
#[derive(Debug, Error)]
pub enum WatchError {
    /// Review service could not be queried
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The response is not `{"homeworks": [...]}`
    #[error("Некорректная структура ответа API: {0}")]
    Shape(String),

    /// A homework record lacks a required key
    #[error("В ответе API нет ключа {0}")]
    MissingField(&'static str),

    /// A homework status is not in the verdict table
    #[error("Недокументированный статус домашней работы: {0}")]
    UnknownStatus(String),
}

/// Required credentials absent at startup, by environment variable name
#[derive(Debug, Error)]
#[error("missing required environment variables: {}", .0.join(", "))]
pub struct MissingCredentials(pub Vec<&'static str>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_keep_their_message() {
        let err = WatchError::from(ClientError::EndpointUnavailable { status: 503 });
        assert_eq!(err.to_string(), "Эндпоинт недоступен. Код ответа API: 503");
    }

    #[test]
    fn test_missing_credentials_lists_names() {
        let err = MissingCredentials(vec!["PRACTICUM_TOKEN", "TELEGRAM_TOKEN"]);
        assert_eq!(
            err.to_string(),
            "missing required environment variables: PRACTICUM_TOKEN, TELEGRAM_TOKEN"
        );
    }
}
