//! Columns: the fields that make up a log line.
//!
//! A [`Column`] is a function from a [`Context`] to the text shown in that
//! field. A logger renders its columns left to right and joins them with
//! [`SEPARATOR`]:
//!
//! ```text
//! <column 0> | <column 1> | <column 2>
//! ```
//!
//! Any closure works as a column:
//!
//! ```rust
//! use standout_log::{Column, Context};
//!
//! let shout = Column::new(|ctx: &Context| ctx.message.to_uppercase());
//! ```

use std::fmt;
use std::sync::Arc;

use console::Style;

use crate::context::Context;
use crate::layout::DEFAULT_TIMESTAMP;

/// Text placed between two rendered columns.
pub const SEPARATOR: &str = " | ";

/// One field of a log line.
///
/// Cheap to clone: the underlying function is shared. The same column may
/// appear several times in a logger.
#[derive(Clone)]
pub struct Column {
    render: Arc<dyn Fn(&Context<'_>) -> String + Send + Sync>,
}

impl Column {
    /// Wraps a function rendering this column.
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&Context<'_>) -> String + Send + Sync + 'static,
    {
        Self {
            render: Arc::new(render),
        }
    }

    /// Renders this column for one line.
    pub fn render(&self, ctx: &Context<'_>) -> String {
        (self.render)(ctx)
    }

    /// The message, unchanged.
    pub fn message() -> Self {
        Self::new(|ctx| ctx.message.to_string())
    }

    /// The level label, see [`Context::format_level`].
    pub fn level() -> Self {
        Self::new(|ctx| ctx.format_level())
    }

    /// A timestamp in `layout`, see [`Context::format_timestamp`].
    pub fn timestamp(layout: impl Into<String>) -> Self {
        let layout = layout.into();
        Self::new(move |ctx| ctx.format_timestamp(&layout))
    }

    /// A date in `layout`, see [`Context::format_date`].
    pub fn date(layout: impl Into<String>) -> Self {
        let layout = layout.into();
        Self::new(move |ctx| ctx.format_date(&layout))
    }

    /// A time in `layout`, never padded.
    pub fn time(layout: impl Into<String>) -> Self {
        let layout = layout.into();
        Self::new(move |ctx| ctx.format_time(&layout))
    }

    /// Fixed text, the same on every line.
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(move |_| text.clone())
    }

    /// The default timestamp column: [`DEFAULT_TIMESTAMP`] in bright blue.
    pub fn default_timestamp() -> Self {
        Self::timestamp(DEFAULT_TIMESTAMP).styled(Style::new().blue().bright())
    }

    /// Applies `style` to whatever this column renders.
    ///
    /// Padding is computed before styling, so alignment is unaffected.
    pub fn styled(self, style: Style) -> Self {
        Self::new(move |ctx| style.apply_to(self.render(ctx)).to_string())
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Column(..)")
    }
}

/// Renders `columns` in order and joins them into one line.
pub fn render_line(columns: &[Column], ctx: &Context<'_>) -> String {
    columns
        .iter()
        .map(|column| column.render(ctx))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
