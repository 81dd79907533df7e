//! Logger selection
//!
//! `LoggerConfig` is meant to be embedded in the host application's own
//! configuration; this crate never reads config files itself.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::LoggingResult;
use crate::logging::{FileLogger, NullLogger, SharedLogger};

/// File name used when no explicit path is configured
pub const DEFAULT_LOG_FILE: &str = "plainlog.log";

/// Default number of caller path segments kept
pub const DEFAULT_DEPTH: usize = 2;

/// Which logger to build and how
///
/// # Example
///
/// ```no_run
/// use plainlog_core::config::LoggerConfig;
///
/// let logger = LoggerConfig::new("/var/log/app.log").with_depth(3).build().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// When false, a `NullLogger` is built
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Log file; defaults to `plainlog.log` in the temp directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Trailing path segments kept in caller annotations
    #[serde(default = "default_depth")]
    pub depth: usize,
}

fn default_enabled() -> bool {
    true
}

fn default_depth() -> usize {
    DEFAULT_DEPTH
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
            depth: DEFAULT_DEPTH,
        }
    }
}

impl LoggerConfig {
    /// Log to the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Logging turned off
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// The file that will be opened
    pub fn resolved_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE))
    }

    /// Build the configured logger
    pub fn build(&self) -> LoggingResult<SharedLogger> {
        if !self.enabled {
            return Ok(Arc::new(NullLogger));
        }

        let logger = FileLogger::try_new(self.resolved_path(), self.depth)?;
        Ok(Arc::new(logger))
    }

    /// Build the configured logger, exiting the process if the file cannot be opened
    pub fn build_or_exit(&self) -> SharedLogger {
        if !self.enabled {
            return Arc::new(NullLogger);
        }

        Arc::new(FileLogger::new(self.resolved_path(), self.depth))
    }
}
