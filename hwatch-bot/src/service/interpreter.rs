//! Status interpreter
//!
//! Turns a homework record into the sentence sent to the operator.

use hwatch_core::domain::homework::Homework;
use hwatch_core::domain::verdict::VerdictTable;

use crate::error::WatchError;

/// Builds the status change message for a homework record
///
/// # Errors
/// * [`WatchError::MissingField`] - no name or no status in the record
/// * [`WatchError::UnknownStatus`] - the status has no verdict
pub fn interpret_status(
    homework: &Homework,
    verdicts: &VerdictTable,
) -> Result<String, WatchError> {
    let name = homework
        .name
        .as_deref()
        .ok_or(WatchError::MissingField("homework_name"))?;
    let status = homework
        .status
        .as_deref()
        .ok_or(WatchError::MissingField("status"))?;
    let verdict = verdicts
        .verdict(status)
        .ok_or_else(|| WatchError::UnknownStatus(status.to_string()))?;

    Ok(format!("Изменился статус проверки работы \"{name}\". {verdict}"))
}
