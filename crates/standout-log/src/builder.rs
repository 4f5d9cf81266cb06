//! Assembling loggers.
//!
//! [`LoggerBuilder`] accumulates levels, paddings and an ordered list of
//! columns, then snapshots them into an immutable [`ColumnLogger`].
//!
//! ```rust
//! use standout_log::{Column, LevelDisplay, Logger, LoggerBuilder, MemorySink, Padding};
//!
//! let sink = MemorySink::new();
//! let mut builder = LoggerBuilder::new();
//! builder
//!     .add_level("INFO", LevelDisplay::new(|| "INFO".into()))
//!     .add_level("WARNING", LevelDisplay::new(|| "WARNING".into()))
//!     .add_padding(Padding::Level)
//!     .add_column(Column::message());
//! builder.add_column_at(0, Column::level()).unwrap();
//!
//! let logger = builder.build_with_sink(sink.clone());
//! logger.log("INFO", "ready").unwrap();
//! assert_eq!(sink.lines(), vec!["INFO    | ready"]);
//! ```
//!
//! # Reuse
//!
//! `build` copies the builder's collections, so mutating the builder later
//! never changes a logger that was already built. Building several loggers
//! from one builder works, but a fresh builder per logger keeps intent
//! clearer.

use std::collections::HashSet;

use crate::column::Column;
use crate::defaults::Defaults;
use crate::error::LogError;
use crate::level::{LevelDisplay, Levels};
use crate::logger::ColumnLogger;
use crate::padding::Padding;
use crate::sink::{Sink, Stdout};

/// Mutable draft of a logger.
#[derive(Debug, Clone, Default)]
pub struct LoggerBuilder {
    levels: Levels,
    paddings: HashSet<Padding>,
    columns: Vec<Column>,
}

impl LoggerBuilder {
    /// Creates an empty builder: no levels, paddings or columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder populated with every standard default.
    ///
    /// See [`Defaults`] for what is added and how to exclude parts of it.
    pub fn with_defaults() -> Self {
        let mut builder = Self::new();
        Defaults::new().apply(&mut builder);
        builder
    }

    /// Registers a level, replacing any level with the same name.
    pub fn add_level(&mut self, name: impl Into<String>, display: LevelDisplay) -> &mut Self {
        self.levels.insert(name.into(), display);
        self
    }

    /// Enables a padding. Enabling it twice has no further effect.
    pub fn add_padding(&mut self, padding: Padding) -> &mut Self {
        self.paddings.insert(padding);
        self
    }

    /// Appends a column to the end of the line.
    pub fn add_column(&mut self, column: Column) -> &mut Self {
        self.columns.push(column);
        self
    }

    /// Inserts a column at `index`, shifting later columns right.
    ///
    /// `index` may be anything from 0 to the current number of columns; the
    /// upper bound appends, exactly like [`add_column`](Self::add_column).
    ///
    /// # Errors
    ///
    /// Returns [`LogError::IndexOutOfRange`] when `index` is greater than the
    /// number of columns. The columns are left unchanged.
    pub fn add_column_at(&mut self, index: usize, column: Column) -> Result<&mut Self, LogError> {
        let len = self.columns.len();
        if index > len {
            return Err(LogError::IndexOutOfRange { index, len });
        }
        self.columns.insert(index, column);
        Ok(self)
    }

    /// Levels registered so far.
    pub fn levels(&self) -> &Levels {
        &self.levels
    }

    /// Paddings enabled so far.
    pub fn paddings(&self) -> &HashSet<Padding> {
        &self.paddings
    }

    /// Columns in render order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Builds a logger writing to standard output.
    pub fn build(&self) -> ColumnLogger<Stdout> {
        self.build_with_sink(Stdout)
    }

    /// Builds a logger writing to `sink`.
    pub fn build_with_sink<S: Sink>(&self, sink: S) -> ColumnLogger<S> {
        ColumnLogger::new(
            self.levels.clone(),
            self.paddings.clone(),
            self.columns.clone(),
            sink,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::Logger;
    use crate::sink::MemorySink;

    fn rendered(builder: &LoggerBuilder) -> String {
        let mut with_level = builder.clone();
        with_level.add_level("L", LevelDisplay::new(|| "L".to_string()));
        with_level
            .build_with_sink(MemorySink::new())
            .render("L", "m")
            .unwrap()
    }

    #[test]
    fn test_add_level_last_write_wins() {
        let mut builder = LoggerBuilder::new();
        builder
            .add_level("INFO", LevelDisplay::new(|| "first".to_string()))
            .add_level("INFO", LevelDisplay::new(|| "second".to_string()));
        assert_eq!(builder.levels().len(), 1);
        assert_eq!(builder.levels()["INFO"].render(), "second");
    }

    #[test]
    fn test_add_padding_is_idempotent() {
        let mut builder = LoggerBuilder::new();
        builder
            .add_padding(Padding::Level)
            .add_padding(Padding::Level)
            .add_padding(Padding::Date);
        assert_eq!(builder.paddings().len(), 2);
    }

    #[test]
    fn test_add_column_appends() {
        let mut builder = LoggerBuilder::new();
        builder
            .add_column(Column::text("a"))
            .add_column(Column::text("b"));
        assert_eq!(rendered(&builder), "a | b");
    }

    #[test]
    fn test_add_column_at_front_and_middle() {
        let mut builder = LoggerBuilder::new();
        builder
            .add_column(Column::text("b"))
            .add_column(Column::text("d"));
        builder.add_column_at(0, Column::text("a")).unwrap();
        builder.add_column_at(2, Column::text("c")).unwrap();
        assert_eq!(rendered(&builder), "a | b | c | d");
    }

    #[test]
    fn test_add_column_at_len_appends() {
        let mut at_end = LoggerBuilder::new();
        at_end.add_column(Column::text("x"));
        at_end.add_column_at(1, Column::text("y")).unwrap();

        let mut appended = LoggerBuilder::new();
        appended
            .add_column(Column::text("x"))
            .add_column(Column::text("y"));

        assert_eq!(rendered(&at_end), rendered(&appended));
    }

    #[test]
    fn test_add_column_at_past_end_fails() {
        let mut builder = LoggerBuilder::new();
        builder.add_column(Column::text("x"));
        let err = builder.add_column_at(3, Column::text("y")).unwrap_err();
        assert!(matches!(err, LogError::IndexOutOfRange { index: 3, len: 1 }));
        assert_eq!(builder.columns().len(), 1);
    }

    #[test]
    fn test_duplicate_columns_allowed() {
        let mut builder = LoggerBuilder::new();
        let column = Column::text("dup");
        builder.add_column(column.clone()).add_column(column);
        assert_eq!(rendered(&builder), "dup | dup");
    }

    #[test]
    fn test_build_snapshots_builder() {
        let mut builder = LoggerBuilder::new();
        builder
            .add_level("INFO", LevelDisplay::new(|| "INFO".to_string()))
            .add_column(Column::message());
        let logger = builder.build_with_sink(MemorySink::new());

        builder
            .add_level("DEBUG", LevelDisplay::new(|| "DEBUG".to_string()))
            .add_padding(Padding::Level)
            .add_column(Column::text("later"));

        assert_eq!(logger.levels().len(), 1);
        assert!(logger.paddings().is_empty());
        assert_eq!(logger.columns().len(), 1);
        assert!(matches!(
            logger.log("DEBUG", "msg"),
            Err(LogError::InvalidLevel(_))
        ));
    }

    #[test]
    fn test_with_defaults_populates_everything() {
        let builder = LoggerBuilder::with_defaults();
        assert_eq!(builder.levels().len(), 5);
        assert_eq!(builder.paddings().len(), 2);
        assert_eq!(builder.columns().len(), 3);
    }
}
