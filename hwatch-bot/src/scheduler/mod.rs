//! Scheduler layer for the bot
//!
//! This layer runs the poll loop: it queries the review service on a fixed
//! cadence, decides whether anything is worth telling the operator and
//! keeps the state needed to avoid repeating itself.

pub mod poller;

pub use poller::StatusPoller;
