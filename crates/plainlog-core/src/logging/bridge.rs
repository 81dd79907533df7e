//! Bridge from the `log` crate facade
//!
//! Lets dependencies that log through `log::info!` and friends end up in the
//! same file as the application's own lines.

use log::{LevelFilter, Log, Metadata, Record};

use super::level::LogLevel;
use super::traits::SharedLogger;
use crate::error::LoggingResult;

/// `log::Log` implementation forwarding to a [`SharedLogger`]
///
/// `Trace` and `Debug` records are written as `INFO` lines; use the max level
/// passed to [`LogBridge::install`] to keep them out.
pub struct LogBridge {
    inner: SharedLogger,
}

impl std::fmt::Debug for LogBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogBridge").finish_non_exhaustive()
    }
}

impl LogBridge {
    pub fn new(inner: SharedLogger) -> Self {
        Self { inner }
    }

    /// Register this bridge as the `log` crate's global logger
    ///
    /// Fails if any `log` logger was already installed in this process.
    pub fn install(self, max_level: LevelFilter) -> LoggingResult<()> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl Log for LogBridge {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.inner.logf(LogLevel::from(record.level()), *record.args());
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemoryLogger;
    use log::Level;
    use std::sync::Arc;

    #[test]
    fn test_bridge_maps_levels_and_formats_args() {
        let memory = Arc::new(MemoryLogger::new());
        let bridge = LogBridge::new(memory.clone());

        bridge.log(
            &Record::builder()
                .args(format_args!("cache miss for {}", "key"))
                .level(Level::Warn)
                .target("cache")
                .build(),
        );
        bridge.log(&Record::builder().args(format_args!("verbose")).level(Level::Debug).build());
        bridge.log(&Record::builder().args(format_args!("fatal")).level(Level::Error).build());

        assert_eq!(
            memory.entries(),
            vec![
                (LogLevel::Warning, "cache miss for key".to_string()),
                (LogLevel::Info, "verbose".to_string()),
                (LogLevel::Error, "fatal".to_string()),
            ]
        );
    }

    #[test]
    fn test_bridge_enabled_for_all_levels() {
        let bridge = LogBridge::new(Arc::new(MemoryLogger::new()));
        let metadata = Metadata::builder().level(Level::Trace).build();
        assert!(bridge.enabled(&metadata));
    }
}
