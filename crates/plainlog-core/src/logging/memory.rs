//! In-memory logger

use std::fmt::{self, Display};

use parking_lot::Mutex;

use super::caller::{self, CallerInfoProvider};
use super::level::LogLevel;
use super::traits::{quick_format, Logger};

/// In-memory logger for testing
///
/// Records every message with its level instead of writing it anywhere.
/// Hand it to a component in place of the production logger and inspect
/// what it logged.
///
/// # Example
///
/// ```
/// use plainlog_core::logging::{LogLevel, Logger, MemoryLogger};
///
/// let logger = MemoryLogger::new();
/// logger.log(LogLevel::Warning, "low disk");
/// assert_eq!(logger.entries(), vec![(LogLevel::Warning, "low disk".to_string())]);
/// ```
#[derive(Debug)]
pub struct MemoryLogger {
    entries: Mutex<Vec<(LogLevel, String)>>,
    depth: usize,
}

impl Default for MemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryLogger {
    /// Create an empty memory logger
    pub fn new() -> Self {
        Self::with_depth(2)
    }

    /// Create an empty memory logger with a custom caller path depth
    pub fn with_depth(depth: usize) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            depth,
        }
    }

    /// Snapshot of all recorded entries, oldest first
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries.lock().clone()
    }

    /// Recorded messages without their levels
    pub fn messages(&self) -> Vec<String> {
        self.entries.lock().iter().map(|(_, m)| m.clone()).collect()
    }

    /// Get the number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Check if nothing was logged
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all recorded entries
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    fn record(&self, level: LogLevel, message: String) {
        self.entries.lock().push((level, message));
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.record(level, message.to_string());
    }

    fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.record(level, args.to_string());
    }

    fn quick_fmt_log(&self, level: LogLevel, initial_text: &str, delim: &str, args: &[&dyn Display]) {
        self.record(level, quick_format(initial_text, delim, args));
    }

    fn log_with_caller_info(&self, level: LogLevel, initial_text: &str, caller: &dyn CallerInfoProvider) {
        let message = caller::annotate(initial_text, self.depth, caller);
        self.log(level, &message);
    }
}
