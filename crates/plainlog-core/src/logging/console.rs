//! Console logger implementation

use std::fmt::{self, Display};
use std::io::Write;

use super::caller::{self, CallerInfoProvider};
use super::level::LogLevel;
use super::line;
use super::traits::{quick_format, Logger};

/// A logger that writes file-format lines to stderr
///
/// Handy when the process runs in a terminal or under a supervisor that
/// captures stderr.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    depth: usize,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a console logger keeping two path segments in caller annotations
    pub fn new() -> Self {
        Self { depth: 2 }
    }

    /// Create a console logger with a custom caller path depth
    pub fn with_depth(depth: usize) -> Self {
        Self { depth }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    fn write_line(&self, level: LogLevel, message: &str) {
        let rendered = line::render(level, message);
        let mut stderr = std::io::stderr().lock();
        let _ = stderr.write_all(rendered.as_bytes());
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.write_line(level, message);
    }

    fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.write_line(level, &args.to_string());
    }

    fn quick_fmt_log(&self, level: LogLevel, initial_text: &str, delim: &str, args: &[&dyn Display]) {
        self.write_line(level, &quick_format(initial_text, delim, args));
    }

    fn log_with_caller_info(&self, level: LogLevel, initial_text: &str, caller: &dyn CallerInfoProvider) {
        let message = caller::annotate(initial_text, self.depth, caller);
        self.log(level, &message);
    }
}
