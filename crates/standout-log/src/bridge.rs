//! Routing the `log` facade through a column logger.
//!
//! Libraries that log with `log::info!` and friends can share the same
//! aligned output as direct [`Logger::log`] calls:
//!
//! ```rust,no_run
//! use standout_log::{bridge, LoggerBuilder};
//!
//! bridge::install(LoggerBuilder::with_defaults().build()).unwrap();
//! log::warn!("disk almost full");
//! ```
//!
//! `log` levels map onto the standard level names:
//!
//! | `log::Level` | Level name |
//! |--------------|------------|
//! | `Error` | `ERROR` |
//! | `Warn` | `WARNING` |
//! | `Info` | `INFO` |
//! | `Debug`, `Trace` | `DEBUG` |
//!
//! Records whose level name isn't registered on the logger are dropped.

use log::{LevelFilter, Metadata, Record, SetLoggerError};

use crate::level::{DEBUG, ERROR, INFO, WARNING};
use crate::logger::Logger;

/// Returns the level name a `log` record is rendered under.
pub fn level_name(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => ERROR,
        log::Level::Warn => WARNING,
        log::Level::Info => INFO,
        log::Level::Debug | log::Level::Trace => DEBUG,
    }
}

/// Adapts a [`Logger`] to the `log::Log` trait.
#[derive(Debug)]
pub struct LogBridge<L> {
    logger: L,
}

impl<L: Logger> LogBridge<L> {
    /// Wraps `logger`.
    pub fn new(logger: L) -> Self {
        Self { logger }
    }

    /// Returns the wrapped logger.
    pub fn logger(&self) -> &L {
        &self.logger
    }
}

impl<L> log::Log for LogBridge<L>
where
    L: Logger + Send + Sync,
{
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.logger
            .levels()
            .contains_key(level_name(metadata.level()))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        // `log::Log` has no error channel; a failed line is dropped.
        let _ = self.logger.log(level_name(record.level()), &message);
    }

    fn flush(&self) {}
}

/// Installs `logger` as the global `log` logger.
///
/// # Errors
///
/// Fails if a global logger was already installed.
pub fn install<L>(logger: L) -> Result<(), SetLoggerError>
where
    L: Logger + Send + Sync + 'static,
{
    log::set_boxed_logger(Box::new(LogBridge::new(logger)))?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
