//! Output destinations for rendered lines.
//!
//! A logger hands every successfully rendered line to its [`Sink`]. The
//! default is [`Stdout`]; tests use [`MemorySink`]; any
//! `Fn(&str) -> io::Result<()>` closure is a sink too:
//!
//! ```rust
//! use standout_log::{Column, LevelDisplay, LoggerBuilder, Logger};
//!
//! let mut builder = LoggerBuilder::new();
//! builder
//!     .add_level("INFO", LevelDisplay::new(|| "INFO".into()))
//!     .add_column(Column::message());
//!
//! let logger = builder.build_with_sink(|line: &str| -> std::io::Result<()> {
//!     eprintln!("{line}");
//!     Ok(())
//! });
//! logger.log("INFO", "to stderr").unwrap();
//! ```

use std::io;
use std::sync::{Arc, Mutex};

use console::Term;

/// Receives one formatted line per successful `log` call.
pub trait Sink {
    /// Writes `line`. The line carries no trailing newline.
    fn emit(&self, line: &str) -> io::Result<()>;
}

/// Blanket implementation for closures.
impl<F> Sink for F
where
    F: Fn(&str) -> io::Result<()>,
{
    fn emit(&self, line: &str) -> io::Result<()> {
        (self)(line)
    }
}

/// Writes lines, each followed by a newline, to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdout;

impl Sink for Stdout {
    fn emit(&self, line: &str) -> io::Result<()> {
        Term::stdout().write_line(line)
    }
}

/// Collects lines in memory.
///
/// Clones share the same buffer, so a test can keep one handle while the
/// logger owns another.
///
/// ```rust
/// use standout_log::{Column, LevelDisplay, Logger, LoggerBuilder, MemorySink};
///
/// let sink = MemorySink::new();
/// let mut builder = LoggerBuilder::new();
/// builder
///     .add_level("INFO", LevelDisplay::new(|| "INFO".into()))
///     .add_column(Column::message());
/// let logger = builder.build_with_sink(sink.clone());
///
/// logger.log("INFO", "captured").unwrap();
/// assert_eq!(sink.lines(), vec!["captured"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every line emitted so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Returns the most recent line, if any.
    pub fn last(&self) -> Option<String> {
        self.lines
            .lock()
            .ok()
            .and_then(|lines| lines.last().cloned())
    }

    /// Returns true if nothing was emitted.
    pub fn is_empty(&self) -> bool {
        self.lines.lock().map(|lines| lines.is_empty()).unwrap_or(true)
    }

    /// Discards every collected line.
    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

impl Sink for MemorySink {
    fn emit(&self, line: &str) -> io::Result<()> {
        let mut lines = self
            .lines
            .lock()
            .map_err(|_| io::Error::other("memory sink lock poisoned"))?;
        lines.push(line.to_string());
        Ok(())
    }
}
