//! Installing the `log` bridge is process-global, so it gets its own binary.

use std::sync::Arc;

use log::LevelFilter;
use plainlog_core::{LogBridge, LogLevel, LoggingError, MemoryLogger};

#[test]
fn test_install_routes_log_macros() {
    let memory = Arc::new(MemoryLogger::new());
    LogBridge::new(memory.clone()).install(LevelFilter::Info).unwrap();

    log::info!("connected to {}", "db");
    log::warn!("slow query");
    log::debug!("filtered out by max level");
    log::error!("lost connection");

    assert_eq!(
        memory.entries(),
        vec![
            (LogLevel::Info, "connected to db".to_string()),
            (LogLevel::Warning, "slow query".to_string()),
            (LogLevel::Error, "lost connection".to_string()),
        ]
    );

    let again = LogBridge::new(memory.clone()).install(LevelFilter::Trace);
    assert!(matches!(again, Err(LoggingError::SetLogger(_))));
}
