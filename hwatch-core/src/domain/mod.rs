//! Core domain types
//!
//! These types describe what the bot tracks: where the next status query
//! starts, what a reviewed homework looks like and how review statuses are
//! worded for the operator.

pub mod cursor;
pub mod homework;
pub mod verdict;
