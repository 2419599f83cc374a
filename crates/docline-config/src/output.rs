//! Output rendering configuration.

use serde::{Deserialize, Serialize};

/// How extracted doc comments are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Pretty-printed JSON array.
    #[default]
    Json,
    /// One compact JSON object per line.
    Raw,
    /// Human-readable listing.
    Text,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}
