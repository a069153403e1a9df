//! hwatch Bot
//!
//! Watches the review status of a homework submission and relays every
//! change to a Telegram chat.
//!
//! Architecture:
//! - Configuration: command-line arguments backed by environment variables
//! - Repositories: the review service and the Telegram chat
//! - Services: response validation, status interpretation, notification
//! - Scheduler: the poll loop with change detection and error deduplication
//!
//! The bot queries the review service every retry interval, tells the
//! operator when the newest homework changes status and reports failures
//! once per distinct error.

mod config;
mod error;
mod repository;
mod scheduler;
mod service;
#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use hwatch_client::{PracticumClient, TelegramClient};
use hwatch_core::domain::cursor::PollCursor;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Args, Config};
use crate::repository::TelegramMessageRepository;
use crate::scheduler::StatusPoller;
use crate::service::{Notifier, startup_message};

const NO_TOKENS_MSG: &str =
    "Программа принудительно остановлена. Отсутствует обязательная переменная окружения:";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // A missing .env file is fine, the variables may come from the environment
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hwatch_bot=info,hwatch_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting hwatch bot");

    let config = match Config::from_args(Args::parse()) {
        Ok(config) => config,
        Err(missing) => {
            for name in &missing.0 {
                error!("{} {}", NO_TOKENS_MSG, name);
            }
            return Ok(());
        }
    };
    config.validate().context("Invalid configuration")?;

    info!(
        "Loaded configuration: endpoint={}, chat_id={}, retry_interval={:?}",
        config.endpoint, config.credentials.telegram_chat_id, config.retry_interval
    );

    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let practicum = PracticumClient::with_client(
        &config.endpoint,
        &config.credentials.practicum_token,
        http.clone(),
    );
    let telegram = TelegramClient::with_client(
        &config.telegram_api_url,
        &config.credentials.telegram_token,
        http,
    );

    let notifier = Notifier::new(Arc::new(TelegramMessageRepository::new(
        telegram,
        config.credentials.telegram_chat_id.clone(),
    )));
    notifier.notify(&startup_message(&Local::now())).await;

    let once = config.once;
    let mut poller = StatusPoller::new(config, Arc::new(practicum), notifier, PollCursor::now());

    if once {
        let outcome = poller.poll_once().await;
        info!(
            "Single poll cycle finished: {:?} (cursor={}, last_seen={:?}, last_error={:?})",
            outcome,
            poller.cursor(),
            poller.last_seen(),
            poller.last_error()
        );
        return Ok(());
    }

    poller.run().await;

    Ok(())
}
