//! Status poller
//!
//! Polls the review service, notifies the operator when the tracked
//! homework changes status and reports failures without repeating the same
//! one every cycle.

use hwatch_core::domain::cursor::PollCursor;
use hwatch_core::domain::homework::Homework;
use std::sync::Arc;
use tokio::time;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::WatchError;
use crate::repository::StatusRepository;
use crate::service::{Notifier, interpret_status, validate_response};

/// Prefix of every failure message sent to the operator
const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// Last status observed for the tracked homework
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastSeen {
    pub status: String,
    pub updated_at: Option<String>,
}

/// What a single poll cycle ended with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The service reported no homework changes
    Idle,
    /// The newest homework still has the last seen status
    Unchanged,
    /// A status change was sent to the operator
    Notified(String),
    /// The cycle failed; `notified` is false when the error was a repeat
    Failed { message: String, notified: bool },
}

/// Poll loop owning the cursor and deduplication state
pub struct StatusPoller {
    config: Config,
    statuses: Arc<dyn StatusRepository>,
    notifier: Notifier,
    cursor: PollCursor,
    last_seen: Option<LastSeen>,
    last_error: Option<String>,
}

impl StatusPoller {
    /// Creates a new status poller starting at `cursor`
    pub fn new(
        config: Config,
        statuses: Arc<dyn StatusRepository>,
        notifier: Notifier,
        cursor: PollCursor,
    ) -> Self {
        Self {
            config,
            statuses,
            notifier,
            cursor,
            last_seen: None,
            last_error: None,
        }
    }

    pub fn cursor(&self) -> PollCursor {
        self.cursor
    }

    pub fn last_seen(&self) -> Option<&LastSeen> {
        self.last_seen.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Runs poll cycles forever, sleeping the retry interval after each one
    pub async fn run(&mut self) {
        info!(
            "Starting status poller (interval: {:?})",
            self.config.retry_interval
        );

        loop {
            if let CycleOutcome::Failed {
                message,
                notified: false,
            } = self.poll_once().await
            {
                debug!("Repeated failure not reported again: {}", message);
            }

            debug!("Next poll in {:?}", self.config.retry_interval);
            time::sleep(self.config.retry_interval).await;
        }
    }

    /// Performs a single poll cycle
    ///
    /// Never fails: errors are logged, possibly reported, and returned as
    /// [`CycleOutcome::Failed`].
    pub async fn poll_once(&mut self) -> CycleOutcome {
        let query_time = PollCursor::now();

        match self.check_statuses().await {
            Ok(outcome) => {
                self.cursor = query_time;
                self.last_error = None;
                outcome
            }
            Err(e) => self.report_failure(e).await,
        }
    }

    async fn check_statuses(&mut self) -> Result<CycleOutcome, WatchError> {
        let raw = self.statuses.fetch_statuses(self.cursor).await?;
        let records = validate_response(&raw)?;

        let Some(record) = records.first() else {
            debug!("No homework updates since {}", self.cursor);
            return Ok(CycleOutcome::Idle);
        };

        if records.len() > 1 {
            debug!(
                "Tracking the newest homework only, {} more ignored",
                records.len() - 1
            );
        }

        let homework = Homework::from(record);
        let message = interpret_status(&homework, &self.config.verdicts)?;
        let observed = observe(&homework)?;

        if self
            .last_seen
            .as_ref()
            .is_some_and(|seen| seen.status == observed.status)
        {
            info!("No status change ({}), waiting for the next poll", observed.status);
            return Ok(CycleOutcome::Unchanged);
        }

        info!(
            "Status changed to {} (updated: {})",
            observed.status,
            observed.updated_at.as_deref().unwrap_or("unknown")
        );
        self.notifier.notify(&message).await;
        self.last_seen = Some(observed);

        Ok(CycleOutcome::Notified(message))
    }

    async fn report_failure(&mut self, e: WatchError) -> CycleOutcome {
        let error_text = e.to_string();
        let message = format!("{}: {}", FAILURE_PREFIX, error_text);
        error!("{}", message);

        if self.last_error.as_deref() == Some(error_text.as_str()) {
            return CycleOutcome::Failed {
                message,
                notified: false,
            };
        }

        self.notifier.notify(&message).await;
        self.last_error = Some(error_text);

        CycleOutcome::Failed {
            message,
            notified: true,
        }
    }
}

fn observe(homework: &Homework) -> Result<LastSeen, WatchError> {
    let status = homework
        .status
        .clone()
        .ok_or(WatchError::MissingField("status"))?;

    Ok(LastSeen {
        status,
        updated_at: homework.update_marker(),
    })
}
