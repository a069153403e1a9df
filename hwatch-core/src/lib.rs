//! hwatch Core
//!
//! Core types shared by the hwatch client and bot crates.
//!
//! This crate contains:
//! - Domain types: the poll cursor, homework records and the verdict table
//! - DTOs: wire shapes for the review service and the Telegram Bot API

pub mod domain;
pub mod dto;
