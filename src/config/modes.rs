//! Progress mode definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How progress checkpoints are spaced during a download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressMode {
    /// Every N percent of the expected size (default).
    #[default]
    Percentage,
    /// Every N seconds of wall-clock time.
    Seconds,
}

impl fmt::Display for ProgressMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressMode::Percentage => write!(f, "percentage"),
            ProgressMode::Seconds => write!(f, "seconds"),
        }
    }
}

impl FromStr for ProgressMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "percentage" | "percent" => Ok(ProgressMode::Percentage),
            "seconds" | "time" => Ok(ProgressMode::Seconds),
            _ => Err(format!("Unknown progress mode: {}", s)),
        }
    }
}
