//! Caller location capture and path truncation

use std::panic::Location;

/// Number of frames skipped when a logger asks for its caller.
///
/// Skips the logging method itself and the function that called it.
pub const CALLER_SKIP_FRAMES: usize = 2;

/// Rendered in place of a file path when no frame is available
pub const UNKNOWN_FILE: &str = "???";

/// A source location reported by a [`CallerInfoProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerFrame {
    pub file: String,
    pub line: u32,
}

impl CallerFrame {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl From<&Location<'_>> for CallerFrame {
    fn from(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }
}

/// Source of the call site for caller-annotated log lines
///
/// Implement this over whatever stack introspection the host has. Returning
/// `None` means the frame could not be resolved.
pub trait CallerInfoProvider {
    /// Capture the frame `skip_frames` levels above the caller
    fn capture_caller_frame(&self, skip_frames: usize) -> Option<CallerFrame>;
}

impl<F> CallerInfoProvider for F
where
    F: Fn(usize) -> Option<CallerFrame>,
{
    fn capture_caller_frame(&self, skip_frames: usize) -> Option<CallerFrame> {
        self(skip_frames)
    }
}

/// Provider backed by `#[track_caller]`
///
/// The location is fixed when the value is built, so the skip count is
/// ignored. Build it at the call site, or let `log_here!` do it.
///
/// # Example
///
/// ```
/// use plainlog_core::logging::{CallerInfoProvider, CallerLocation};
///
/// let here = CallerLocation::here();
/// let frame = here.capture_caller_frame(2).unwrap();
/// assert!(frame.file.ends_with(".rs"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CallerLocation {
    location: &'static Location<'static>,
}

impl CallerLocation {
    #[track_caller]
    pub fn here() -> Self {
        Self {
            location: Location::caller(),
        }
    }

    pub fn file(&self) -> &'static str {
        self.location.file()
    }

    pub fn line(&self) -> u32 {
        self.location.line()
    }
}

impl CallerInfoProvider for CallerLocation {
    fn capture_caller_frame(&self, _skip_frames: usize) -> Option<CallerFrame> {
        Some(CallerFrame::from(self.location))
    }
}

/// Keep the last `depth` `/`-separated segments of `path`.
///
/// The result starts at the `depth`-th separator counted from the end, so
/// `truncate_path("/a/b/c/d.go", 2)` is `"/c/d.go"`. A depth of zero, or one
/// larger than the number of separators, keeps the full path.
pub fn truncate_path(path: &str, depth: usize) -> &str {
    if depth == 0 {
        return path;
    }

    path.rmatch_indices('/')
        .nth(depth - 1)
        .map_or(path, |(idx, _)| &path[idx..])
}

/// Render `"<path>:<line>: <text>"` for the frame reported by `provider`
pub fn annotate(text: &str, depth: usize, provider: &dyn CallerInfoProvider) -> String {
    match provider.capture_caller_frame(CALLER_SKIP_FRAMES) {
        Some(frame) => format!("{}:{}: {}", truncate_path(&frame.file, depth), frame.line, text),
        None => format!("{}:0: {}", UNKNOWN_FILE, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_depth_two() {
        assert_eq!(truncate_path("/a/b/c/d.go", 2), "/c/d.go");
    }

    #[test]
    fn test_truncate_depth_one() {
        assert_eq!(truncate_path("/a/b/c/d.go", 1), "/d.go");
    }

    // Edge case: more segments requested than the path has
    #[test]
    fn test_truncate_depth_exceeds_separators() {
        assert_eq!(truncate_path("/a/b/c/d.go", 9), "/a/b/c/d.go");
        assert_eq!(truncate_path("d.go", 1), "d.go");
    }

    #[test]
    fn test_truncate_depth_zero_keeps_path() {
        assert_eq!(truncate_path("/a/b/c/d.go", 0), "/a/b/c/d.go");
    }

    #[test]
    fn test_truncate_relative_path() {
        assert_eq!(truncate_path("src/logging/caller.rs", 1), "/caller.rs");
        assert_eq!(truncate_path("src/logging/caller.rs", 2), "/logging/caller.rs");
        assert_eq!(truncate_path("src/logging/caller.rs", 3), "src/logging/caller.rs");
    }

    #[test]
    fn test_closure_provider_receives_skip_count() {
        let provider = |skip: usize| Some(CallerFrame::new("/srv/app/main.rs", skip as u32));
        let frame = provider.capture_caller_frame(CALLER_SKIP_FRAMES).unwrap();
        assert_eq!(frame.line, 2);
    }

    #[test]
    fn test_annotate_formats_frame() {
        let provider = |_: usize| Some(CallerFrame::new("/a/b/c/d.go", 42));
        assert_eq!(annotate("boom", 2, &provider), "/c/d.go:42: boom");
    }

    #[test]
    fn test_annotate_missing_frame() {
        let provider = |_: usize| -> Option<CallerFrame> { None };
        assert_eq!(annotate("boom", 2, &provider), "???:0: boom");
    }

    #[test]
    fn test_caller_location_points_here() {
        let expected_line = line!() + 1;
        let here = CallerLocation::here();
        assert_eq!(here.line(), expected_line);
        assert!(here.file().ends_with("caller.rs"));
        let frame = here.capture_caller_frame(0).unwrap();
        assert_eq!(frame.line, expected_line);
    }
}
