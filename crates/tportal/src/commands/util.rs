//! Shared helpers for command handlers.

use tportal_core::EntityId;

use crate::console::TerminalDialogs;
use crate::error::CliError;

/// Parse a numeric id argument.
pub fn parse_id(field: &str, raw: &str) -> Result<EntityId, CliError> {
    raw.parse().map_err(|_| CliError::Validation {
        field: field.into(),
        reason: format!("expected a numeric id, got '{raw}'"),
    })
}

/// Fail early when a dialog would need an answer nobody can give.
pub fn ensure_answerable(answered: bool, action: &str) -> Result<(), CliError> {
    if answered || TerminalDialogs::interactive() {
        return Ok(());
    }
    Err(CliError::NonInteractive {
        action: action.into(),
    })
}
