//! Logger trait definition

use std::fmt::{self, Display, Write as _};
use std::sync::Arc;

use super::caller::CallerInfoProvider;
use super::level::LogLevel;

/// Leveled logging interface
///
/// Implementations:
/// - `FileLogger`: Appends timestamped lines to a file
/// - `ConsoleLogger`: Writes the same lines to stderr
/// - `NullLogger`: Drops everything
/// - `MemoryLogger`: Records entries for tests
///
/// None of the operations report errors; a logger that fails to write
/// drops the line.
pub trait Logger: Send + Sync {
    /// Log a plain message
    fn log(&self, level: LogLevel, message: &str);

    /// Log a formatted message, usually built with `format_args!` or [`logf!`](crate::logf)
    fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>);

    /// Log `initial_text` followed by `args` joined with `delim`
    ///
    /// No delimiter is placed between `initial_text` and the first argument.
    fn quick_fmt_log(
        &self,
        level: LogLevel,
        initial_text: &str,
        delim: &str,
        args: &[&dyn Display],
    );

    /// Log `initial_text` prefixed with the caller's truncated `path:line`
    fn log_with_caller_info(
        &self,
        level: LogLevel,
        initial_text: &str,
        caller: &dyn CallerInfoProvider,
    );
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Build the body of a quick log line
///
/// ```
/// use plainlog_core::logging::quick_format;
///
/// assert_eq!(quick_format("start", ",", &[&"a", &"b", &3]), "starta,b,3");
/// ```
pub fn quick_format(initial_text: &str, delim: &str, args: &[&dyn Display]) -> String {
    let mut out = String::from(initial_text);
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push_str(delim);
        }
        let _ = write!(out, "{}", arg);
    }
    out
}

/// Extension trait with per-level shortcuts
pub trait LoggerExt: Logger {
    /// Log an info message
    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Log a warning message
    fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    /// Log an error message
    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Log an info message with format arguments
    fn info_fmt(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Info, args);
    }

    /// Log a warning message with format arguments
    fn warning_fmt(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Warning, args);
    }

    /// Log an error message with format arguments
    fn error_fmt(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Error, args);
    }
}

// Implement LoggerExt for all Logger implementations
impl<T: Logger + ?Sized> LoggerExt for T {}

/// Log a formatted message: `logf!(logger, LogLevel::Info, "took {}ms", ms)`
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $($arg:tt)*) => {
        $logger.logf($level, format_args!($($arg)*))
    };
}

/// Log a delimiter-joined line: `quick_log!(logger, LogLevel::Info, "ids: ", ", ", a, b)`
#[macro_export]
macro_rules! quick_log {
    ($logger:expr, $level:expr, $initial:expr, $delim:expr $(, $arg:expr)* $(,)?) => {
        $logger.quick_fmt_log(
            $level,
            $initial,
            $delim,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        )
    };
}

/// Log a message annotated with the location of this macro call
#[macro_export]
macro_rules! log_here {
    ($logger:expr, $level:expr, $text:expr) => {
        $logger.log_with_caller_info(
            $level,
            $text,
            &$crate::logging::CallerLocation::here(),
        )
    };
}
