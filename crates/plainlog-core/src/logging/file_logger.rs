//! File-backed logger
//!
//! Appends timestamped, level-prefixed lines to a single file. Each line is
//! rendered in full and written with one call while the file lock is held, so
//! concurrent callers never see a line carrying another call's level.

use std::fmt::{self, Display};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::caller::{self, CallerInfoProvider};
use super::level::LogLevel;
use super::line;
use super::traits::{quick_format, Logger};
use crate::error::{LoggingError, LoggingResult};

/// Exit status used when the log file cannot be opened
pub const FATAL_EXIT_CODE: i32 = 1;

/// Logger that appends to a file
///
/// # Example
///
/// ```no_run
/// use plainlog_core::logging::{FileLogger, LogLevel, Logger};
///
/// // Keep two trailing path segments in caller annotations, e.g. "/src/main.rs"
/// let logger = FileLogger::new("/var/log/app.log", 2);
/// logger.log(LogLevel::Info, "started");
/// ```
#[derive(Debug)]
pub struct FileLogger {
    file: Mutex<File>,
    path: PathBuf,
    depth: usize,
}

impl FileLogger {
    /// Open `path` for appending, exiting the process if that fails.
    ///
    /// A logger that cannot log is treated as a broken startup invariant.
    /// Use [`FileLogger::try_new`] to handle the error instead.
    pub fn new(path: impl AsRef<Path>, depth: usize) -> Self {
        match Self::try_new(path, depth) {
            Ok(logger) => logger,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(FATAL_EXIT_CODE);
            }
        }
    }

    /// Open `path` for appending, creating it if absent
    pub fn try_new(path: impl AsRef<Path>, depth: usize) -> LoggingResult<Self> {
        let path = path.as_ref();
        let file = open_append(path).map_err(|e| LoggingError::open(path, e))?;

        Ok(Self {
            file: Mutex::new(file),
            path: path.to_path_buf(),
            depth,
        })
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of trailing path segments kept in caller annotations
    pub fn depth(&self) -> usize {
        self.depth
    }

    fn write_line(&self, level: LogLevel, message: &str) {
        let rendered = line::render(level, message);
        let mut file = self.file.lock();
        let _ = file.write_all(rendered.as_bytes());
    }
}

#[cfg(unix)]
fn open_append(path: &Path) -> std::io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new()
        .create(true)
        .append(true)
        .mode(0o666)
        .open(path)
}

#[cfg(not(unix))]
fn open_append(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

impl Logger for FileLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.write_line(level, message);
    }

    fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        match args.as_str() {
            Some(message) => self.write_line(level, message),
            None => self.write_line(level, &args.to_string()),
        }
    }

    fn quick_fmt_log(&self, level: LogLevel, initial_text: &str, delim: &str, args: &[&dyn Display]) {
        self.write_line(level, &quick_format(initial_text, delim, args));
    }

    fn log_with_caller_info(&self, level: LogLevel, initial_text: &str, caller: &dyn CallerInfoProvider) {
        let message = caller::annotate(initial_text, self.depth, caller);
        self.log(level, &message);
    }
}
