//! YAML logger configuration.
//!
//! A [`LoggerConfig`] describes a logger declaratively and turns into a
//! [`LoggerBuilder`], so custom columns can still be added in code.
//!
//! ```rust
//! use standout_log::{LoggerConfig, Logger, MemorySink};
//!
//! let config = LoggerConfig::from_yaml(r#"
//! defaults:
//!   exclude_columns: [0]
//! levels:
//!   NOTICE: magenta.bold
//! columns:
//!   - kind: text
//!     text: worker-1
//! "#).unwrap();
//!
//! let sink = MemorySink::new();
//! let logger = config.into_builder().unwrap().build_with_sink(sink.clone());
//! logger.log("NOTICE", "started").unwrap();
//! assert!(sink.last().unwrap().ends_with(" | started | worker-1"));
//! ```
//!
//! # Format
//!
//! | Key | Meaning |
//! |-----|---------|
//! | `defaults` | Optional. Applies [`Defaults`], with its three exclusion lists |
//! | `levels` | Level name to `console` dotted style (`"bold.red"`, `"cyan"`, `""`) |
//! | `paddings` | List of `timestamp`, `date`, `level` |
//! | `columns` | Columns appended after the defaults, in order |
//!
//! Each column has a `kind` (`timestamp`, `date`, `time`, `level`,
//! `message`, `text`), an optional `style`, a `layout` for the time based
//! kinds and a `text` for `text` columns.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use console::Style;
use serde::{Deserialize, Serialize};

use crate::builder::LoggerBuilder;
use crate::column::Column;
use crate::defaults::Defaults;
use crate::layout::DEFAULT_TIMESTAMP;
use crate::level::LevelDisplay;
use crate::padding::Padding;

/// Errors produced while loading a logger configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The YAML could not be parsed.
    #[error("failed to parse logger config{}: {source}", path_suffix(.path))]
    Parse {
        /// Source file, if the config came from disk.
        path: Option<PathBuf>,
        #[source]
        source: serde_yaml::Error,
    },

    /// The config file could not be read.
    #[error("failed to read logger config {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A column is missing a field its kind requires.
    #[error("column {index} ({kind:?}) requires a `{field}` field")]
    MissingField {
        index: usize,
        kind: ColumnKind,
        field: &'static str,
    },
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// What a configured column renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// [`Column::timestamp`], layout defaults to [`DEFAULT_TIMESTAMP`].
    Timestamp,
    /// [`Column::date`], layout required.
    Date,
    /// [`Column::time`], layout required.
    Time,
    /// [`Column::level`].
    Level,
    /// [`Column::message`].
    Message,
    /// [`Column::text`], text required.
    Text,
}

/// One configured column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub kind: ColumnKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl ColumnSpec {
    fn to_column(&self, index: usize) -> Result<Column, ConfigError> {
        let missing = |field| ConfigError::MissingField {
            index,
            kind: self.kind,
            field,
        };

        let column = match self.kind {
            ColumnKind::Timestamp => {
                Column::timestamp(self.layout.as_deref().unwrap_or(DEFAULT_TIMESTAMP))
            }
            ColumnKind::Date => Column::date(self.layout.clone().ok_or_else(|| missing("layout"))?),
            ColumnKind::Time => Column::time(self.layout.clone().ok_or_else(|| missing("layout"))?),
            ColumnKind::Level => Column::level(),
            ColumnKind::Message => Column::message(),
            ColumnKind::Text => Column::text(self.text.clone().ok_or_else(|| missing("text"))?),
        };

        Ok(match &self.style {
            Some(style) => column.styled(Style::from_dotted_str(style)),
            None => column,
        })
    }
}

/// Declarative description of a logger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Standard defaults to apply first, if any.
    pub defaults: Option<Defaults>,
    /// Extra levels: name to dotted style.
    pub levels: BTreeMap<String, String>,
    /// Extra paddings.
    pub paddings: Vec<Padding>,
    /// Columns appended after the defaults.
    pub columns: Vec<ColumnSpec>,
}

impl LoggerConfig {
    /// Parses a config from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed YAML or unknown kinds.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|source| ConfigError::Parse { path: None, source })
    }

    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] if the file can't be read and
    /// [`ConfigError::Parse`] if it isn't a valid config.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })
    }

    /// Builds a [`LoggerBuilder`] from this config.
    ///
    /// Defaults are applied first; configured levels then override standard
    /// levels of the same name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] for incomplete columns.
    pub fn into_builder(self) -> Result<LoggerBuilder, ConfigError> {
        let mut builder = LoggerBuilder::new();
        if let Some(defaults) = &self.defaults {
            defaults.apply(&mut builder);
        }

        for (name, style) in &self.levels {
            builder.add_level(
                name.as_str(),
                LevelDisplay::styled(name.as_str(), Style::from_dotted_str(style)),
            );
        }

        for padding in &self.paddings {
            builder.add_padding(*padding);
        }

        for (index, spec) in self.columns.iter().enumerate() {
            builder.add_column(spec.to_column(index)?);
        }

        Ok(builder)
    }
}
