//! Process-wide logger handle
//!
//! Prefer passing a [`SharedLogger`] to the components that log. The global
//! handle is for code with no such context. It can be set exactly once;
//! reading it before then yields a [`NullLogger`].

use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};

use super::noop::NullLogger;
use super::traits::SharedLogger;
use crate::error::{LoggingError, LoggingResult};

static GLOBAL: OnceCell<SharedLogger> = OnceCell::new();

static NULL: Lazy<SharedLogger> = Lazy::new(|| Arc::new(NullLogger));

/// Install the process-wide logger
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use plainlog_core::logging::{set_logger, FileLogger};
///
/// set_logger(Arc::new(FileLogger::new("/var/log/app.log", 2))).unwrap();
/// ```
pub fn set_logger(logger: SharedLogger) -> LoggingResult<()> {
    GLOBAL
        .set(logger)
        .map_err(|_| LoggingError::AlreadyInitialized)
}

/// The process-wide logger, or a null logger if none was installed
pub fn logger() -> SharedLogger {
    GLOBAL.get().unwrap_or_else(|| Lazy::force(&NULL)).clone()
}

/// Check if a process-wide logger was installed
pub fn is_initialized() -> bool {
    GLOBAL.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogLevel, MemoryLogger};

    // The cell is process-wide, so all assertions about it live in one test
    #[test]
    fn test_global_logger_set_once() {
        assert!(!is_initialized());
        logger().log(LogLevel::Info, "dropped before init");

        let memory = Arc::new(MemoryLogger::new());
        set_logger(memory.clone()).unwrap();
        assert!(is_initialized());

        logger().log(LogLevel::Error, "after init");
        assert_eq!(memory.messages(), vec!["after init"]);

        let second = set_logger(Arc::new(NullLogger));
        assert!(matches!(second, Err(LoggingError::AlreadyInitialized)));

        logger().log(LogLevel::Info, "still routed");
        assert_eq!(memory.len(), 2);
    }
}
