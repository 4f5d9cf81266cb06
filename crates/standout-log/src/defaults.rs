//! Standard levels, paddings and columns.
//!
//! Levels:
//!
//! | Name      | Style      |
//! |-----------|------------|
//! | `INFO`    | cyan       |
//! | `DEBUG`   | green      |
//! | `ERROR`   | red        |
//! | `FATAL`   | bold red   |
//! | `WARNING` | yellow     |
//!
//! Paddings: [`Padding::Timestamp`], [`Padding::Level`].
//!
//! Columns:
//!
//! | Index | Column |
//! |-------|--------|
//! | 0     | timestamp ([`DEFAULT_TIMESTAMP`](crate::layout::DEFAULT_TIMESTAMP), bright blue) |
//! | 1     | level |
//! | 2     | message |
//!
//! Each category can be trimmed independently:
//!
//! ```rust
//! use standout_log::{Defaults, LoggerBuilder, Padding};
//!
//! let mut builder = LoggerBuilder::new();
//! Defaults::new()
//!     .exclude_level("FATAL")
//!     .exclude_level("DEBUG")
//!     .exclude_padding(Padding::Timestamp)
//!     .exclude_column(0)
//!     .apply(&mut builder);
//!
//! assert_eq!(builder.levels().len(), 3);
//! assert_eq!(builder.columns().len(), 2);
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::builder::LoggerBuilder;
use crate::column::Column;
use crate::level::standard_levels;
use crate::padding::Padding;

/// Exclusion lists for the standard defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Level names to leave out.
    pub exclude_levels: HashSet<String>,
    /// Paddings to leave out.
    pub exclude_paddings: HashSet<Padding>,
    /// Column positions (0 = timestamp, 1 = level, 2 = message) to leave out.
    pub exclude_columns: HashSet<usize>,
}

impl Defaults {
    /// Defaults with nothing excluded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Leaves out the level named `name`.
    pub fn exclude_level(mut self, name: impl Into<String>) -> Self {
        self.exclude_levels.insert(name.into());
        self
    }

    /// Leaves out `padding`.
    pub fn exclude_padding(mut self, padding: Padding) -> Self {
        self.exclude_paddings.insert(padding);
        self
    }

    /// Leaves out the column at `index`.
    pub fn exclude_column(mut self, index: usize) -> Self {
        self.exclude_columns.insert(index);
        self
    }

    /// Adds every non-excluded default to `builder`.
    ///
    /// Columns are inserted with [`LoggerBuilder::add_column_at`] at their
    /// standard index, so columns the builder already holds keep their
    /// relative order around them. When that index is past the end because
    /// earlier standard columns were excluded, the column goes right after
    /// the standard columns placed so far instead.
    pub fn apply<'b>(&self, builder: &'b mut LoggerBuilder) -> &'b mut LoggerBuilder {
        for (name, display) in standard_levels() {
            if !self.exclude_levels.contains(name) {
                builder.add_level(name, display);
            }
        }

        for padding in [Padding::Timestamp, Padding::Level] {
            if !self.exclude_paddings.contains(&padding) {
                builder.add_padding(padding);
            }
        }

        let columns = [
            (0, Column::default_timestamp()),
            (1, Column::level()),
            (2, Column::message()),
        ];
        let mut placed = 0;
        for (index, column) in columns {
            if self.exclude_columns.contains(&index) {
                continue;
            }
            let at = if index <= builder.columns().len() {
                index
            } else {
                placed
            };
            if builder.add_column_at(at, column).is_err() {
                continue;
            }
            placed += 1;
        }

        builder
    }
}

/// Applies the defaults to `builder`, leaving out everything listed.
///
/// Shorthand for building a [`Defaults`] from the three exclusion lists.
pub fn set_defaults<'b>(
    builder: &'b mut LoggerBuilder,
    exclude_levels: &[&str],
    exclude_paddings: &[Padding],
    exclude_columns: &[usize],
) -> &'b mut LoggerBuilder {
    let defaults = Defaults {
        exclude_levels: exclude_levels.iter().map(|s| s.to_string()).collect(),
        exclude_paddings: exclude_paddings.iter().copied().collect(),
        exclude_columns: exclude_columns.iter().copied().collect(),
    };
    defaults.apply(builder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::info;
    use crate::logger::Logger;
    use crate::sink::MemorySink;
    use serial_test::serial;

    #[test]
    fn test_all_defaults() {
        let mut builder = LoggerBuilder::new();
        Defaults::new().apply(&mut builder);

        let mut names: Vec<&str> = builder.levels().keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["DEBUG", "ERROR", "FATAL", "INFO", "WARNING"]);
        assert!(builder.paddings().contains(&Padding::Timestamp));
        assert!(builder.paddings().contains(&Padding::Level));
        assert!(!builder.paddings().contains(&Padding::Date));
        assert_eq!(builder.columns().len(), 3);
    }

    #[test]
    fn test_exclusions_are_independent() {
        let mut builder = LoggerBuilder::new();
        set_defaults(&mut builder, &["FATAL"], &[Padding::Level], &[2]);

        assert_eq!(builder.levels().len(), 4);
        assert!(!builder.levels().contains_key("FATAL"));
        assert_eq!(builder.paddings().len(), 1);
        assert_eq!(builder.columns().len(), 2);
    }

    #[test]
    fn test_excluding_timestamp_keeps_level_and_message() {
        let sink = MemorySink::new();
        let mut builder = LoggerBuilder::new();
        set_defaults(&mut builder, &[], &[], &[0]);
        let logger = builder.build_with_sink(sink.clone());

        logger.log("INFO", "Hello, world!").unwrap();
        let expected = format!("{}    | Hello, world!", info().render());
        assert_eq!(sink.lines(), vec![expected]);
    }

    #[test]
    #[serial]
    fn test_excluded_middle_column_closes_gap() {
        let mut builder = LoggerBuilder::new();
        set_defaults(&mut builder, &[], &[], &[1]);
        let logger = builder.build_with_sink(MemorySink::new());

        let line = logger.render("INFO", "msg").unwrap();
        assert_eq!(builder.columns().len(), 2);
        assert!(line.ends_with(" | msg"), "{line}");
        assert!(!line.contains("INFO"), "{line}");
    }

    #[test]
    fn test_defaults_keep_standard_indices_around_existing_columns() {
        let mut builder = LoggerBuilder::new();
        builder.add_column(Column::text("tail"));
        set_defaults(&mut builder, &[], &[], &[0]);
        let logger = builder.build_with_sink(MemorySink::new());

        let line = logger.render("INFO", "msg").unwrap();
        assert_eq!(line, format!("tail | {}    | msg", info().render()));
    }

    #[test]
    fn test_defaults_close_gap_on_empty_builder() {
        let mut builder = LoggerBuilder::new();
        set_defaults(&mut builder, &[], &[], &[0, 1]);
        let logger = builder.build_with_sink(MemorySink::new());

        assert_eq!(builder.columns().len(), 1);
        assert_eq!(logger.render("INFO", "msg").unwrap(), "msg");
    }

    #[test]
    #[serial]
    fn test_defaults_on_populated_builder_use_fixed_indices() {
        let mut builder = LoggerBuilder::new();
        builder
            .add_column(Column::text("a"))
            .add_column(Column::text("b"));
        set_defaults(&mut builder, &[], &[], &[]);
        let logger = builder.build_with_sink(MemorySink::new());

        let line = logger.render("INFO", "msg").unwrap();
        let parts: Vec<&str> = line.split(" | ").collect();
        assert_eq!(parts.len(), 5, "{line}");
        assert_eq!(parts[1], format!("{}   ", info().render()));
        assert_eq!(parts[2], "msg");
        assert_eq!(&parts[3..], ["a", "b"]);
    }

    #[test]
    #[serial]
    fn test_default_line_shape() {
        let sink = MemorySink::new();
        let logger = LoggerBuilder::with_defaults().build_with_sink(sink.clone());
        logger.log("INFO", "Hello, world!").unwrap();

        let line = sink.last().unwrap();
        let parts: Vec<&str> = line.split(" | ").collect();
        assert_eq!(parts.len(), 3);
        assert!(console::strip_ansi_codes(parts[0]).contains(" @ "));
        assert_eq!(parts[1], format!("{}   ", info().render()));
        assert_eq!(parts[2], "Hello, world!");
    }

    #[test]
    fn test_defaults_from_yaml() {
        let defaults: Defaults =
            serde_yaml::from_str("exclude_levels: [DEBUG]\nexclude_columns: [0]").unwrap();
        assert_eq!(defaults, Defaults::new().exclude_level("DEBUG").exclude_column(0));
    }
}
