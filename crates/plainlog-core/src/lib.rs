//! plainlog Core
//!
//! A small leveled logging facade. Components receive a [`SharedLogger`] and
//! log through the [`Logger`] trait; the application picks the implementation
//! once at startup:
//! - `FileLogger`: Timestamped, level-prefixed lines appended to a file
//! - `NullLogger`: Logging turned off without touching call sites
//! - `ConsoleLogger`: The file format on stderr
//! - `MemoryLogger`: Captures entries for tests
//!
//! ```rust,no_run
//! use plainlog_core::{logf, log_here, quick_log};
//! use plainlog_core::logging::{FileLogger, LogLevel, Logger};
//!
//! let logger = FileLogger::new("/var/log/app.log", 2);
//! logger.log(LogLevel::Info, "started");
//! logf!(logger, LogLevel::Warning, "{} retries left", 3);
//! quick_log!(logger, LogLevel::Info, "workers: ", ", ", "a", "b");
//! log_here!(logger, LogLevel::Error, "unreachable state");
//! ```
//!
//! Output lines look like `2024/03/09 07:05:01 ERROR: /src/main.rs:12: unreachable state`.

pub mod error;
pub mod logging;
pub mod config;

// Re-export commonly used types
pub use error::{LoggingError, LoggingResult};

pub use logging::{
    ConsoleLogger, FileLogger, LogBridge, LogLevel, Logger, LoggerExt, MemoryLogger,
    NullLogger, SharedLogger,
};

pub use config::LoggerConfig;
