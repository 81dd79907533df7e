//! Leveled logging facade and its implementations

mod level;
mod traits;
mod caller;
mod line;
mod noop;
mod console;
mod memory;
mod global;
mod bridge;
pub mod file_logger;

pub use level::{LogLevel, ParseLevelError};
pub use traits::{quick_format, BoxedLogger, Logger, LoggerExt, SharedLogger};
pub use caller::{
    annotate, truncate_path, CallerFrame, CallerInfoProvider, CallerLocation,
    CALLER_SKIP_FRAMES, UNKNOWN_FILE,
};
pub use line::{render, TIMESTAMP_FORMAT};
pub use noop::NullLogger;
pub use console::ConsoleLogger;
pub use memory::MemoryLogger;
pub use global::{is_initialized, logger, set_logger};
pub use bridge::LogBridge;
pub use file_logger::FileLogger;
