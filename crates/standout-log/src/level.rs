//! Log levels and their styled labels.
//!
//! A level is a name (the key passed to [`Logger::log`](crate::Logger::log))
//! paired with a [`LevelDisplay`] that produces the label printed in the
//! level column. Displays are plain functions, so any styling provider works:
//!
//! ```rust
//! use standout_log::{LevelDisplay, LoggerBuilder};
//! use console::Style;
//!
//! let mut builder = LoggerBuilder::new();
//! builder
//!     .add_level("NOTICE", LevelDisplay::styled("NOTICE", Style::new().magenta()))
//!     .add_level("PLAIN", LevelDisplay::new(|| "plain".to_string()));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use console::Style;

/// Registered levels keyed by name.
pub type Levels = HashMap<String, LevelDisplay>;

/// Produces the label shown for a level.
///
/// Cheap to clone: the underlying function is shared.
#[derive(Clone)]
pub struct LevelDisplay {
    render: Arc<dyn Fn() -> String + Send + Sync>,
}

impl LevelDisplay {
    /// Wraps a function producing the label.
    pub fn new<F>(render: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self {
            render: Arc::new(render),
        }
    }

    /// A label rendered with a `console` style.
    ///
    /// The style honours `console`'s color detection, so output piped to a
    /// file stays plain.
    pub fn styled(label: impl Into<String>, style: Style) -> Self {
        let label = label.into();
        Self::new(move || style.apply_to(&label).to_string())
    }

    /// Renders the label.
    pub fn render(&self) -> String {
        (self.render)()
    }
}

impl fmt::Debug for LevelDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LevelDisplay").field(&self.render()).finish()
    }
}

/// Name of the standard informational level.
pub const INFO: &str = "INFO";
/// Name of the standard debug level.
pub const DEBUG: &str = "DEBUG";
/// Name of the standard error level.
pub const ERROR: &str = "ERROR";
/// Name of the standard fatal level.
pub const FATAL: &str = "FATAL";
/// Name of the standard warning level.
pub const WARNING: &str = "WARNING";

/// `INFO` in cyan.
pub fn info() -> LevelDisplay {
    LevelDisplay::styled(INFO, Style::new().cyan())
}

/// `DEBUG` in green.
pub fn debug() -> LevelDisplay {
    LevelDisplay::styled(DEBUG, Style::new().green())
}

/// `ERROR` in red.
pub fn error() -> LevelDisplay {
    LevelDisplay::styled(ERROR, Style::new().red())
}

/// `FATAL` in bold red.
pub fn fatal() -> LevelDisplay {
    LevelDisplay::styled(FATAL, Style::new().red().bold())
}

/// `WARNING` in yellow.
pub fn warning() -> LevelDisplay {
    LevelDisplay::styled(WARNING, Style::new().yellow())
}

/// The five standard levels in registration order.
pub fn standard_levels() -> [(&'static str, LevelDisplay); 5] {
    [
        (INFO, info()),
        (DEBUG, debug()),
        (ERROR, error()),
        (FATAL, fatal()),
        (WARNING, warning()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::display_width;

    #[test]
    fn test_custom_display() {
        let display = LevelDisplay::new(|| "custom".to_string());
        assert_eq!(display.render(), "custom");
    }

    #[test]
    fn test_styled_display_keeps_visible_text() {
        let display = LevelDisplay::styled("NOTICE", Style::new().magenta().force_styling(true));
        let rendered = display.render();
        assert!(rendered.contains("NOTICE"));
        assert!(rendered.contains('\x1b'));
        assert_eq!(display_width(&rendered), 6);
    }

    #[test]
    fn test_standard_level_widths() {
        let widths: Vec<usize> = standard_levels()
            .iter()
            .map(|(_, display)| display_width(&display.render()))
            .collect();
        assert_eq!(widths, vec![4, 5, 5, 5, 7]);
    }

    #[test]
    fn test_clone_shares_function() {
        let display = warning();
        let cloned = display.clone();
        assert_eq!(display.render(), cloned.render());
    }
}
