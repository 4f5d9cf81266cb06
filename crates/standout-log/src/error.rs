//! Error and status types for logging operations.
//!
//! Every failure here is local and recoverable: a rejected call produces no
//! output and the logger stays usable.

use std::io;

/// Outcome code of a [`Logger::log`](crate::Logger::log) call.
///
/// The numeric codes are stable so callers that only care about a code
/// (for example when forwarding to a foreign interface) can use [`Status::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The line was rendered and emitted.
    Success,
    /// The level is not registered on the logger.
    InvalidLevel,
    /// The logger has no columns.
    NoColumnsSet,
}

impl Status {
    /// Returns the numeric code for this status.
    pub fn code(self) -> i32 {
        match self {
            Status::Success => 0,
            Status::InvalidLevel => 1,
            Status::NoColumnsSet => 2,
        }
    }
}

/// Errors returned by builders and loggers.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The level passed to `log` isn't registered on this logger.
    #[error("{0} is not a valid level for this logger")]
    InvalidLevel(String),

    /// The logger was built without any column.
    #[error("you must set at least one column")]
    NoColumnsSet,

    /// A column insertion index was past the end of the column list.
    #[error("column index {index} is out of range (must be at most {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// The sink failed to write the rendered line.
    #[error("failed to emit log line: {0}")]
    Sink(#[from] io::Error),
}

impl LogError {
    /// Maps this error to the status code a `log` call reports for it.
    ///
    /// Returns `None` for errors that are not produced by `log` validation.
    pub fn status(&self) -> Option<Status> {
        match self {
            LogError::InvalidLevel(_) => Some(Status::InvalidLevel),
            LogError::NoColumnsSet => Some(Status::NoColumnsSet),
            LogError::IndexOutOfRange { .. } | LogError::Sink(_) => None,
        }
    }
}
