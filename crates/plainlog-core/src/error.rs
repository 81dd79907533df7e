//! Logging error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while setting up a logger
///
/// Logging calls themselves never fail; these only surface during startup.
#[derive(Error, Debug)]
pub enum LoggingError {
    /// The log file could not be opened for appending
    #[error("could not initialise logger; attempted path '{}': {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The process-wide logger was already set
    #[error("Process-wide logger is already initialized")]
    AlreadyInitialized,

    /// Another `log` crate logger was installed first
    #[error("Failed to install log bridge: {0}")]
    SetLogger(#[from] log::SetLoggerError),
}

impl LoggingError {
    /// Create an open error for the given path
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}

pub type LoggingResult<T> = Result<T, LoggingError>;
