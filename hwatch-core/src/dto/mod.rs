//! Data Transfer Objects for the external services
//!
//! Wire shapes sent to the review service and the Telegram Bot API.

pub mod homework;
pub mod telegram;
