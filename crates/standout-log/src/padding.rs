//! Alignment modes a logger can opt into.

use serde::{Deserialize, Serialize};

/// An alignment mode that makes a field line up vertically across log lines.
///
/// Paddings only change how fields are aligned; they never make a `log` call
/// valid or invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Padding {
    /// Pads timestamps (date + time) to the widest timestamp seen so far.
    Timestamp,
    /// Pads dates to the widest possible calendar date.
    Date,
    /// Pads level labels to the widest registered level.
    Level,
}
