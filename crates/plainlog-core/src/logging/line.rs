//! Line rendering shared by the writing loggers

use chrono::{DateTime, Local};

use super::level::LogLevel;

/// Date and time layout placed at the start of every line
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Render `<date> <time> <prefix><message>` terminated by exactly one newline
pub fn render(level: LogLevel, message: &str) -> String {
    render_at(Local::now(), level, message)
}

pub(crate) fn render_at(now: DateTime<Local>, level: LogLevel, message: &str) -> String {
    let mut line = format!("{} {}{}", now.format(TIMESTAMP_FORMAT), level.prefix(), message);
    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap()
    }

    #[test]
    fn test_render_layout() {
        let line = render_at(fixed_time(), LogLevel::Warning, "disk almost full");
        assert_eq!(line, "2024/03/09 07:05:01 WARNING: disk almost full\n");
    }

    #[test]
    fn test_render_keeps_single_trailing_newline() {
        let line = render_at(fixed_time(), LogLevel::Info, "done\n");
        assert_eq!(line, "2024/03/09 07:05:01 INFO: done\n");
    }

    #[test]
    fn test_render_empty_message() {
        let line = render_at(fixed_time(), LogLevel::Error, "");
        assert_eq!(line, "2024/03/09 07:05:01 ERROR: \n");
    }
}
