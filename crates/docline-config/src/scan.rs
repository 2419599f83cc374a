//! Source scanning configuration.

use serde::{Deserialize, Serialize};

/// File extensions scanned when a directory is given.
fn default_extensions() -> Vec<String> {
    vec![String::from("rs"), String::from("swift")]
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Extensions (without the dot) of files picked up from directories.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Report declarations that have no doc comment.
    #[serde(default)]
    pub include_undocumented: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            include_undocumented: false,
        }
    }
}

impl ScanConfig {
    /// Whether a file with extension `ext` should be scanned.
    pub fn matches_extension(&self, ext: &str) -> bool {
        self.extensions
            .iter()
            .any(|candidate| candidate.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}
