//! Width helpers for styled terminal text.

use unicode_width::UnicodeWidthStr;

/// Returns the number of terminal columns `s` occupies.
///
/// ANSI escape sequences are stripped before measuring, and wide characters
/// (CJK, most emoji) count as two columns.
///
/// # Example
///
/// ```rust
/// use standout_log::display_width;
///
/// assert_eq!(display_width("INFO"), 4);
/// assert_eq!(display_width("\x1b[36mINFO\x1b[0m"), 4);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    console::strip_ansi_codes(s).width()
}

/// Pads `s` with trailing spaces until its display width reaches `width`.
///
/// Strings already at or past `width` are returned unchanged. Styling codes
/// are preserved and do not count toward the width.
///
/// # Example
///
/// ```rust
/// use standout_log::pad_right;
///
/// assert_eq!(pad_right("INFO", 7), "INFO   ");
/// assert_eq!(pad_right("WARNING", 4), "WARNING");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    let mut result = String::with_capacity(s.len() + width - current);
    result.push_str(s);
    result.push_str(&" ".repeat(width - current));
    result
}
