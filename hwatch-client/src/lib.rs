//! hwatch HTTP Clients
//!
//! Thin, typed HTTP clients for the two services the bot talks to:
//! - [`PracticumClient`]: the homework review service (status queries)
//! - [`TelegramClient`]: the Telegram Bot API (operator notifications)
//!
//! # Example
//!
//! ```no_run
//! use hwatch_client::PracticumClient;
//! use hwatch_core::domain::cursor::PollCursor;
//!
//! # async fn example() -> hwatch_client::Result<()> {
//! let client = PracticumClient::new(
//!     "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!     "my-oauth-token",
//! );
//!
//! let statuses = client.homework_statuses(PollCursor::now()).await?;
//! println!("{}", statuses);
//! # Ok(())
//! # }
//! ```

pub mod error;
mod practicum;
mod telegram;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use practicum::{DEFAULT_ENDPOINT, PracticumClient};
pub use telegram::{DEFAULT_API_URL, TelegramClient};
