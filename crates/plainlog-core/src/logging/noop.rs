//! No-op logger implementation

use std::fmt::{self, Display};

use super::caller::CallerInfoProvider;
use super::level::LogLevel;
use super::traits::Logger;

/// A logger that does nothing
///
/// Swap it in to turn logging off without touching call sites.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl NullLogger {
    /// Create a new null logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NullLogger {
    fn log(&self, _level: LogLevel, _message: &str) {}

    fn logf(&self, _level: LogLevel, _args: fmt::Arguments<'_>) {}

    fn quick_fmt_log(&self, _level: LogLevel, _initial_text: &str, _delim: &str, _args: &[&dyn Display]) {}

    fn log_with_caller_info(&self, _level: LogLevel, _initial_text: &str, _caller: &dyn CallerInfoProvider) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::caller::CallerFrame;
    use std::cell::Cell;

    #[test]
    fn test_null_logger_accepts_everything() {
        let logger = NullLogger::new();

        // These should all do nothing without panicking
        for level in LogLevel::ALL {
            logger.log(level, "message");
            logger.logf(level, format_args!("{} {}", 1, "two"));
            logger.quick_fmt_log(level, "start", ",", &[&"a", &2]);
            logger.quick_fmt_log(level, "start", ",", &[]);
        }
    }

    #[test]
    fn test_null_logger_never_asks_for_caller() {
        let calls = Cell::new(0);
        let provider = |_: usize| {
            calls.set(calls.get() + 1);
            Some(CallerFrame::new("/a/b.rs", 1))
        };

        NullLogger.log_with_caller_info(LogLevel::Error, "ignored", &provider);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_null_logger_as_shared() {
        let shared: crate::logging::SharedLogger = std::sync::Arc::new(NullLogger);
        crate::logf!(shared, LogLevel::Info, "{}", 42);
        crate::log_here!(shared, LogLevel::Warning, "nothing");
    }
}
