//! Bot configuration
//!
//! Command-line arguments (each backed by an environment variable) and the
//! immutable [`Config`] built from them once at startup.

use clap::Parser;
use hwatch_client::{DEFAULT_API_URL, DEFAULT_ENDPOINT};
use hwatch_core::domain::verdict::VerdictTable;
use std::time::Duration;

use crate::error::MissingCredentials;

pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Default pause between two status queries
pub const DEFAULT_RETRY_TIME: u64 = 600;

/// Command-line arguments
///
/// Secrets are optional here so that their absence is reported by
/// [`Config::from_args`] instead of a clap usage error.
#[derive(Debug, Clone, Parser)]
#[command(name = "hwatch-bot")]
#[command(about = "Relays homework review status changes to Telegram", long_about = None)]
pub struct Args {
    /// OAuth token of the review service
    #[arg(long, env = "PRACTICUM_TOKEN", hide_env_values = true)]
    pub practicum_token: Option<String>,

    /// Telegram bot token
    #[arg(long, env = "TELEGRAM_TOKEN", hide_env_values = true)]
    pub telegram_token: Option<String>,

    /// Chat that receives the notifications
    #[arg(long, env = "TELEGRAM_CHAT_ID")]
    pub telegram_chat_id: Option<String>,

    /// Homework status endpoint
    #[arg(long, env = "PRACTICUM_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Telegram Bot API base URL
    #[arg(long, env = "TELEGRAM_API_URL", default_value = DEFAULT_API_URL)]
    pub telegram_api_url: String,

    /// Seconds between two status queries
    #[arg(long, env = "RETRY_TIME", default_value_t = DEFAULT_RETRY_TIME)]
    pub retry_time: u64,

    /// HTTP request timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT", default_value_t = 30)]
    pub request_timeout: u64,

    /// Run a single poll cycle and exit
    #[arg(long)]
    pub once: bool,
}

/// The three secrets the bot cannot start without
#[derive(Clone)]
pub struct Credentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &"***")
            .field("telegram_token", &"***")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

/// Bot configuration
///
/// Built once in `main` and handed to every component that needs it.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,

    /// Homework status endpoint
    pub endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Pause after every poll cycle, successful or not
    pub retry_interval: Duration,

    /// Timeout applied to every HTTP request
    pub request_timeout: Duration,

    /// Status code -> operator-facing verdict
    pub verdicts: VerdictTable,

    /// Stop after one cycle
    pub once: bool,
}

impl Config {
    /// Creates a configuration with default endpoints and intervals
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            telegram_api_url: DEFAULT_API_URL.to_string(),
            retry_interval: Duration::from_secs(DEFAULT_RETRY_TIME),
            request_timeout: Duration::from_secs(30),
            verdicts: VerdictTable::default(),
            once: false,
        }
    }

    /// Builds the configuration from parsed arguments
    ///
    /// Fails with every missing credential at once, so the operator sees the
    /// full list in a single run. Blank values count as missing.
    pub fn from_args(args: Args) -> Result<Self, MissingCredentials> {
        let practicum_token = present(args.practicum_token);
        let telegram_token = present(args.telegram_token);
        let telegram_chat_id = present(args.telegram_chat_id);

        let (Some(practicum_token), Some(telegram_token), Some(telegram_chat_id)) =
            (&practicum_token, &telegram_token, &telegram_chat_id)
        else {
            let missing = [
                (PRACTICUM_TOKEN, practicum_token.is_none()),
                (TELEGRAM_TOKEN, telegram_token.is_none()),
                (TELEGRAM_CHAT_ID, telegram_chat_id.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, absent)| absent.then_some(name))
            .collect();
            return Err(MissingCredentials(missing));
        };

        let mut config = Self::new(Credentials {
            practicum_token: practicum_token.clone(),
            telegram_token: telegram_token.clone(),
            telegram_chat_id: telegram_chat_id.clone(),
        });
        config.endpoint = args.endpoint;
        config.telegram_api_url = args.telegram_api_url;
        config.retry_interval = Duration::from_secs(args.retry_time);
        config.request_timeout = Duration::from_secs(args.request_timeout);
        config.once = args.once;

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, url) in [
            ("endpoint", &self.endpoint),
            ("telegram_api_url", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", name);
            }
        }

        if self.retry_interval.as_secs() == 0 {
            anyhow::bail!("retry_interval must be greater than 0");
        }

        if self.request_timeout.as_secs() == 0 {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        if self.verdicts.is_empty() {
            anyhow::bail!("verdict table cannot be empty");
        }

        Ok(())
    }
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
