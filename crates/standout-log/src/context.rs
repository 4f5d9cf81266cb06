//! Per-call rendering context.
//!
//! Every [`Logger::log`](crate::Logger::log) call builds one [`Context`] and
//! hands it to each column in turn. Besides the raw call data, the context
//! carries a reference back to the logger that created it, which is how the
//! formatting helpers find out which levels and paddings are in effect.
//!
//! # Alignment
//!
//! Padding is decided at render time from what is already known:
//!
//! | Helper | Padding | Pads to |
//! |--------|---------|---------|
//! | [`Context::format_level`] | [`Padding::Level`] | widest registered level label |
//! | [`Context::format_date`] | [`Padding::Date`] | [`LONGEST_DATE_WIDTH`] |
//! | [`Context::format_timestamp`] | [`Padding::Timestamp`] | process-wide watermark |
//! | [`Context::format_time`] | none | |
//!
//! Without level padding:
//!
//! ```text
//! Saturday August 29, 2020 @ 5:41:00 | WARNING | Hello, world
//! Saturday August 29, 2020 @ 5:41:20 | INFO | Hello, world
//! ```
//!
//! With level padding:
//!
//! ```text
//! Saturday August 29, 2020 @ 5:41:00 | WARNING | Hello, world
//! Saturday August 29, 2020 @ 5:41:20 | INFO    | Hello, world
//! ```

use std::any::Any;

use chrono::{DateTime, Local};

use crate::layout::{format as format_layout, LONGEST_DATE_WIDTH};
use crate::logger::Logger;
use crate::padding::Padding;
use crate::util::{display_width, pad_right};
use crate::watermark::observe_timestamp_width;

/// Data available to columns while rendering a single line.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    /// The message passed to `log`.
    pub message: &'a str,
    /// When the line was logged.
    pub time: DateTime<Local>,
    /// The level name passed to `log`.
    pub level: &'a str,
    /// The logger rendering this line.
    pub logger: &'a dyn Logger,
    extra: Option<&'a dyn Any>,
}

impl<'a> Context<'a> {
    /// Creates a context for one log line.
    pub fn new(
        logger: &'a dyn Logger,
        level: &'a str,
        message: &'a str,
        time: DateTime<Local>,
    ) -> Self {
        Self {
            message,
            time,
            level,
            logger,
            extra: None,
        }
    }

    /// Attaches opaque auxiliary data for custom columns.
    pub fn with_extra(mut self, extra: &'a dyn Any) -> Self {
        self.extra = Some(extra);
        self
    }

    /// Returns the auxiliary data if it is a `T`.
    pub fn extra<T: Any>(&self) -> Option<&'a T> {
        self.extra.and_then(|extra| extra.downcast_ref::<T>())
    }

    fn has_padding(&self, padding: Padding) -> bool {
        self.logger.paddings().contains(&padding)
    }

    /// Renders the level label, padded when [`Padding::Level`] is enabled.
    ///
    /// The padded width is the widest visible label across *all* levels
    /// registered on the logger, not just the ones that have been used, so
    /// the level column lines up from the very first line. A level that
    /// isn't registered renders as its bare name.
    pub fn format_level(&self) -> String {
        let levels = self.logger.levels();
        let display = match levels.get(self.level) {
            Some(display) => display.render(),
            None => self.level.to_string(),
        };

        if !self.has_padding(Padding::Level) {
            return display;
        }

        let longest = levels
            .values()
            .map(|level| display_width(&level.render()))
            .max()
            .unwrap_or(0);
        pad_right(&display, longest)
    }

    /// Formats the time as a date, padded to [`LONGEST_DATE_WIDTH`] when
    /// [`Padding::Date`] is enabled.
    pub fn format_date(&self, layout: &str) -> String {
        let formatted = format_layout(&self.time, layout);
        if self.has_padding(Padding::Date) {
            pad_right(&formatted, LONGEST_DATE_WIDTH)
        } else {
            formatted
        }
    }

    /// Formats the time with `layout`, without any padding.
    pub fn format_time(&self, layout: &str) -> String {
        format_layout(&self.time, layout)
    }

    /// Formats a full timestamp, padded when [`Padding::Timestamp`] is enabled.
    ///
    /// The padded width is the process-wide watermark (see
    /// [`crate::watermark`]): the widest timestamp any logger has formatted so
    /// far, including this one.
    pub fn format_timestamp(&self, layout: &str) -> String {
        let formatted = format_layout(&self.time, layout);
        if !self.has_padding(Padding::Timestamp) {
            return formatted;
        }
        let longest = observe_timestamp_width(display_width(&formatted));
        pad_right(&formatted, longest)
    }
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("message", &self.message)
            .field("time", &self.time)
            .field("level", &self.level)
            .field("has_extra", &self.extra.is_some())
            .finish()
    }
}
