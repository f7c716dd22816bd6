//! Pure string utility functions for window-title parsing and caption text

use crate::constants::TRUNCATE_SUFFIX;

/// Split a window title on a delimiter, trimming whitespace from each part.
///
/// Empty parts are kept so callers can reason about the segment count the
/// way the title was actually laid out.
///
/// # Examples
///
/// ```
/// use stepcast_domain::utils::title::split_segments;
///
/// let parts = split_segments("main.rs - stepcast - Visual Studio Code", " - ");
/// assert_eq!(parts, vec!["main.rs", "stepcast", "Visual Studio Code"]);
///
/// assert_eq!(split_segments("Untitled", " - "), vec!["Untitled"]);
/// ```
#[must_use]
pub fn split_segments(title: &str, delimiter: &str) -> Vec<String> {
    title.split(delimiter).map(|part| part.trim().to_string()).collect()
}

/// Return the trimmed text after the last occurrence of `separator`.
///
/// # Returns
///
/// * `Some(String)` - The trimmed remainder (may be empty)
/// * `None` - If the separator does not occur
///
/// # Examples
///
/// ```
/// use stepcast_domain::utils::title::last_segment;
///
/// assert_eq!(last_segment("dev@box: ~/src/app", ':'), Some("~/src/app".to_string()));
/// assert_eq!(last_segment("zsh", ':'), None);
/// ```
#[must_use]
pub fn last_segment(title: &str, separator: char) -> Option<String> {
    title.rfind(separator).map(|pos| title[pos + separator.len_utf8()..].trim().to_string())
}

/// Truncate text to `max_chars` characters, appending `...` when cut.
///
/// Counts characters rather than bytes so multi-byte input never splits a
/// code point.
///
/// # Examples
///
/// ```
/// use stepcast_domain::utils::title::truncate_preview;
///
/// assert_eq!(truncate_preview("hello", 30), "hello");
/// assert_eq!(truncate_preview("abcdef", 3), "abc...");
/// ```
#[must_use]
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], TRUNCATE_SUFFIX),
        None => text.to_string(),
    }
}
