use thiserror::Error;
use tracing::{error, warn};

use crate::shortcuts::{PersistenceError, ShortcutParseError};

/// Error severity for UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
}

/// Domain-specific errors surfaced to the client UI
#[derive(Error, Debug)]
pub enum CommitKitError {
    #[error("Invalid shortcut: {0}")]
    Shortcut(#[from] ShortcutParseError),

    #[error("Shortcut overrides error: {0}")]
    Overrides(#[from] PersistenceError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CommitKitError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Shortcut(_) => ErrorSeverity::Warning,
            Self::Overrides(_) => ErrorSeverity::Warning,
            Self::Config(_) => ErrorSeverity::Warning,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Shortcut(e) => format!("Could not parse shortcut: {}", e),
            Self::Overrides(e) => format!("Shortcut overrides could not be applied: {}", e),
            Self::Config(msg) => format!("Configuration issue: {}", msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, CommitKitError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the user doesn't need to know.
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?err,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?err,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}
