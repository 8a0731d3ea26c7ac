//! Config schema and deserialization

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shift used when neither the command line nor the config names one
pub const DEFAULT_SHIFT: i64 = 3;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
}

/// Root config structure for .securetextrc.json
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Caesar shift applied when `--shift` is omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_shift: Option<i64>,

    /// Default output format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    /// Colored console output. Default: true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Config after command-line flags have been applied
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub shift: i64,
    pub format: OutputFormat,
    pub color: bool,
}

// The shift is the Caesar key, so it stays out of debug output
impl fmt::Debug for EffectiveConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectiveConfig")
            .field("shift", &"<redacted>")
            .field("format", &self.format)
            .field("color", &self.color)
            .finish()
    }
}

impl Config {
    /// Apply command-line flags over the file values. Flags win.
    ///
    /// `json` and `no_color` are plain switches, so they can only turn
    /// JSON on or color off.
    pub fn merge_with_cli(&self, shift: Option<i64>, json: bool, no_color: bool) -> EffectiveConfig {
        EffectiveConfig {
            shift: shift.or(self.default_shift).unwrap_or(DEFAULT_SHIFT),
            format: if json {
                OutputFormat::Json
            } else {
                self.format.unwrap_or_default()
            },
            color: !no_color && self.color.unwrap_or(true),
        }
    }
}
