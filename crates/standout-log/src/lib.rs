//! # Standout Log - Aligned Column Logging for the Terminal
//!
//! `standout-log` renders log lines as delimited columns: a timestamp, a
//! styled level label, the message, or any field you compute yourself. Lines
//! from different levels line up vertically.
//!
//! ```text
//! Saturday August 29, 2020 @ 5:41:00 | WARNING | Disk almost full
//! Saturday August 29, 2020 @ 5:41:20 | INFO    | Cleanup finished
//! ```
//!
//! ## Core Concepts
//!
//! - [`LoggerBuilder`]: collects levels, paddings and columns, then builds a logger
//! - [`Logger`]: the logging capability; [`ColumnLogger`] is the implementation
//! - [`Column`]: a function from the per-call [`Context`] to the text of one field
//! - [`Padding`]: alignment modes for timestamps, dates and levels
//! - [`Defaults`]: the standard levels, paddings and 3-column layout
//! - [`Sink`]: where rendered lines go ([`Stdout`], [`MemorySink`], closures)
//!
//! ## Quick Start
//!
//! ```rust
//! use standout_log::{Logger, LoggerBuilder};
//!
//! let logger = LoggerBuilder::with_defaults().build();
//! logger.log("INFO", "Hello, world!").unwrap();
//! ```
//!
//! ## Custom Layouts
//!
//! ```rust
//! use standout_log::{Column, Context, LevelDisplay, Logger, LoggerBuilder, MemorySink, Padding};
//! use console::Style;
//!
//! let sink = MemorySink::new();
//! let mut builder = LoggerBuilder::new();
//! builder
//!     .add_level("UP", LevelDisplay::styled("UP", Style::new().green()))
//!     .add_level("DOWN", LevelDisplay::styled("DOWN", Style::new().red()))
//!     .add_padding(Padding::Level)
//!     .add_column(Column::level())
//!     .add_column(Column::message())
//!     .add_column(Column::new(|ctx: &Context| format!("{} chars", ctx.message.len())));
//!
//! let logger = builder.build_with_sink(sink.clone());
//! logger.log("UP", "api").unwrap();
//! logger.log("DOWN", "db").unwrap();
//!
//! let lines = sink.lines();
//! assert!(lines[0].ends_with("| api | 3 chars"));
//! assert!(lines[1].ends_with("| db | 2 chars"));
//! ```
//!
//! ## Errors
//!
//! Logging never panics. Unknown levels, loggers without columns, bad column
//! indices and sink failures come back as [`LogError`].
//!
//! ## Configuration
//!
//! Loggers can also be described in YAML, see [`LoggerConfig`].

pub mod bridge;
mod builder;
mod column;
pub mod config;
mod context;
mod defaults;
mod error;
pub mod layout;
mod level;
mod logger;
mod padding;
mod sink;
mod util;
pub mod watermark;

pub use builder::LoggerBuilder;
pub use column::{render_line, Column, SEPARATOR};
pub use config::{ColumnKind, ColumnSpec, ConfigError, LoggerConfig};
pub use context::Context;
pub use defaults::{set_defaults, Defaults};
pub use error::{LogError, Status};
pub use level::{
    debug, error, fatal, info, standard_levels, warning, LevelDisplay, Levels, DEBUG, ERROR,
    FATAL, INFO, WARNING,
};
pub use logger::{ColumnLogger, Logger};
pub use padding::Padding;
pub use sink::{MemorySink, Sink, Stdout};
pub use util::{display_width, pad_right};
