//! Built loggers.
//!
//! [`Logger`] is the capability every logger offers: read its levels,
//! paddings and columns, and log a line. [`ColumnLogger`] is the concrete
//! implementation produced by [`LoggerBuilder`](crate::LoggerBuilder); its
//! sink decides where lines go.

use std::any::Any;
use std::collections::HashSet;

use chrono::Local;

use crate::column::{render_line, Column};
use crate::context::Context;
use crate::error::{LogError, Status};
use crate::level::Levels;
use crate::padding::Padding;
use crate::sink::{Sink, Stdout};

/// A logger that renders `(level, message)` pairs into column lines.
pub trait Logger {
    /// Returns every level registered on this logger.
    fn levels(&self) -> &Levels;

    /// Returns the paddings this logger uses.
    fn paddings(&self) -> &HashSet<Padding>;

    /// Returns the columns in render order.
    fn columns(&self) -> &[Column];

    /// Logs a message.
    ///
    /// # Errors
    ///
    /// - [`LogError::InvalidLevel`] when `level` isn't registered
    /// - [`LogError::NoColumnsSet`] when the logger has no columns
    ///
    /// Nothing is emitted when an error is returned.
    fn log(&self, level: &str, message: &str) -> Result<Status, LogError>;

    /// Like [`log`](Logger::log), with auxiliary data that custom columns can
    /// read through [`Context::extra`].
    fn log_with_extra(&self, level: &str, message: &str, extra: &dyn Any)
        -> Result<Status, LogError>;
}

/// Logger rendering its columns into a [`Sink`].
///
/// Immutable once built; safe to share between threads when the sink is.
#[derive(Debug, Clone)]
pub struct ColumnLogger<S = Stdout> {
    levels: Levels,
    paddings: HashSet<Padding>,
    columns: Vec<Column>,
    sink: S,
}

impl<S: Sink> ColumnLogger<S> {
    pub(crate) fn new(
        levels: Levels,
        paddings: HashSet<Padding>,
        columns: Vec<Column>,
        sink: S,
    ) -> Self {
        Self {
            levels,
            paddings,
            columns,
            sink,
        }
    }

    /// Returns the sink lines are written to.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Renders the line `log` would emit, without emitting it.
    ///
    /// # Errors
    ///
    /// Same validation as [`Logger::log`].
    pub fn render(&self, level: &str, message: &str) -> Result<String, LogError> {
        self.render_with(level, message, None)
    }

    fn validate(&self, level: &str) -> Result<(), LogError> {
        if !self.levels.contains_key(level) {
            return Err(LogError::InvalidLevel(level.to_string()));
        }
        if self.columns.is_empty() {
            return Err(LogError::NoColumnsSet);
        }
        Ok(())
    }

    fn render_with(
        &self,
        level: &str,
        message: &str,
        extra: Option<&dyn Any>,
    ) -> Result<String, LogError> {
        self.validate(level)?;
        let mut ctx = Context::new(self, level, message, Local::now());
        if let Some(extra) = extra {
            ctx = ctx.with_extra(extra);
        }
        Ok(render_line(&self.columns, &ctx))
    }

    fn emit(&self, line: String) -> Result<Status, LogError> {
        self.sink.emit(&line)?;
        Ok(Status::Success)
    }
}

impl<S: Sink> Logger for ColumnLogger<S> {
    fn levels(&self) -> &Levels {
        &self.levels
    }

    fn paddings(&self) -> &HashSet<Padding> {
        &self.paddings
    }

    fn columns(&self) -> &[Column] {
        &self.columns
    }

    fn log(&self, level: &str, message: &str) -> Result<Status, LogError> {
        let line = self.render_with(level, message, None)?;
        self.emit(line)
    }

    fn log_with_extra(
        &self,
        level: &str,
        message: &str,
        extra: &dyn Any,
    ) -> Result<Status, LogError> {
        let line = self.render_with(level, message, Some(extra))?;
        self.emit(line)
    }
}
