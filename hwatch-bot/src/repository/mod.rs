//! Repository layer
//!
//! Repositories abstract the two external services the bot talks to. They
//! carry no business logic: one fetches raw homework statuses, the other
//! delivers a chat message.
//!
//! All repositories are trait-based to enable testing and mocking.

mod messages;
mod statuses;

// Re-export traits
pub use messages::MessageRepository;
pub use statuses::StatusRepository;

// Re-export implementations
pub use messages::TelegramMessageRepository;
