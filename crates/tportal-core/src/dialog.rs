// ── Modal dialogs ──
//
// Confirmation and selection prompts. A dismissed dialog is not an error:
// it resolves to `DialogOutcome::Cancelled`, and callers skip the guarded
// action without side effects.

use std::fmt;
use std::future::Future;

/// Result of a modal dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome<T> {
    /// The user affirmed, carrying the selection (if any).
    Confirmed(T),
    /// The user dismissed the dialog.
    Cancelled,
}

impl<T> DialogOutcome<T> {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// The confirmed payload, if any.
    pub fn confirmed(self) -> Option<T> {
        match self {
            Self::Confirmed(value) => Some(value),
            Self::Cancelled => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DialogOutcome<U> {
        match self {
            Self::Confirmed(value) => DialogOutcome::Confirmed(f(value)),
            Self::Cancelled => DialogOutcome::Cancelled,
        }
    }
}

/// Which dialog layout to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogTemplate {
    /// Yes/no confirmation.
    Confirm,
    /// Pick one item from a collection.
    Select,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Title and message shown in a dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogParams {
    pub title: String,
    pub message: String,
}

/// Everything a dialog host needs to present a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    pub template: DialogTemplate,
    pub size: DialogSize,
    pub params: DialogParams,
}

impl DialogRequest {
    /// A medium confirmation dialog.
    pub fn confirm(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            template: DialogTemplate::Confirm,
            size: DialogSize::Medium,
            params: DialogParams {
                title: title.into(),
                message: message.into(),
            },
        }
    }

    /// A medium selection dialog.
    pub fn select(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            template: DialogTemplate::Select,
            ..Self::confirm(title, message)
        }
    }
}

/// Host for modal dialogs.
///
/// Each call blocks the view until the user answers; the future resolves
/// exactly once.
pub trait Dialogs {
    /// Present a confirmation dialog.
    fn confirm(&self, request: &DialogRequest) -> impl Future<Output = DialogOutcome<()>> + Send;

    /// Present a selection dialog over `choices`, labelled by `Display`.
    fn select<T>(
        &self,
        request: &DialogRequest,
        choices: Vec<T>,
    ) -> impl Future<Output = DialogOutcome<T>> + Send
    where
        T: fmt::Display + Send;
}
