//! Time layout building blocks.
//!
//! Layouts are `chrono` strftime strings. The constants below name the
//! common pieces so layouts read like the lines they produce:
//!
//! ```rust
//! use standout_log::layout::{DAY, HOUR, MINUTE, MONTH, SECOND, WEEKDAY, YEAR};
//!
//! let layout = format!("{WEEKDAY} {MONTH} {DAY}, {YEAR} @ {HOUR}:{MINUTE}:{SECOND}");
//! assert_eq!(layout, standout_log::layout::DEFAULT_TIMESTAMP);
//! ```

use std::fmt::Write;

use chrono::{DateTime, TimeZone};

/// Full weekday name ("Saturday").
pub const WEEKDAY: &str = "%A";
/// Day of month without padding ("29", "5").
pub const DAY: &str = "%-d";
/// Full month name ("August").
pub const MONTH: &str = "%B";
/// Four digit year ("2020").
pub const YEAR: &str = "%Y";

/// 12-hour clock hour without padding ("5").
pub const HOUR: &str = "%-I";
/// 24-hour clock hour, zero padded ("17").
pub const HOUR24: &str = "%H";
/// Minute, zero padded ("41").
pub const MINUTE: &str = "%M";
/// Second, zero padded ("00").
pub const SECOND: &str = "%S";

/// Layout used by the default timestamp column:
/// `Saturday August 29, 2020 @ 5:41:00`.
pub const DEFAULT_TIMESTAMP: &str = "%A %B %-d, %Y @ %-I:%M:%S";

/// Width every padded date is stretched to.
///
/// "Wednesday September 30th, 9999" is the longest calendar date a layout
/// built from the pieces above can produce.
pub const LONGEST_DATE_WIDTH: usize = 30;

/// Formats `time` with `layout`.
///
/// A layout chrono cannot format (an unknown `%` specifier, for instance)
/// is returned verbatim rather than panicking mid-log.
pub fn format<Tz>(time: &DateTime<Tz>, layout: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    match write!(out, "{}", time.format(layout)) {
        Ok(()) => out,
        Err(_) => layout.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn sample() -> DateTime<Local> {
        Local.with_ymd_and_hms(2020, 8, 29, 17, 41, 0).unwrap()
    }

    #[test]
    fn test_default_timestamp_layout() {
        assert_eq!(
            format(&sample(), DEFAULT_TIMESTAMP),
            "Saturday August 29, 2020 @ 5:41:00"
        );
    }

    #[test]
    fn test_hour24() {
        assert_eq!(format(&sample(), &format!("{HOUR24}:{MINUTE}")), "17:41");
    }

    #[test]
    fn test_literal_layout() {
        assert_eq!(format(&sample(), "plain text"), "plain text");
    }

    #[test]
    fn test_invalid_layout_is_verbatim() {
        assert_eq!(format(&sample(), "%Q oops"), "%Q oops");
    }
}
