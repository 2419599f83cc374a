//! # docline-config
//!
//! Layered configuration loading for docline using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DOCLINE_*` prefix, `__` as separator)
//! 2. Project-level `.docline/config.toml`
//! 3. User-level `~/.config/docline/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DOCLINE_OUTPUT__FORMAT` -> `output.format` and
//! `DOCLINE_SCAN__INCLUDE_UNDOCUMENTED` -> `scan.include_undocumented`.
//!
//! # Usage
//!
//! ```no_run
//! use docline_config::DoclineConfig;
//!
//! let config = DoclineConfig::load().expect("config");
//! println!("scanning {:?}", config.scan.extensions);
//! ```

mod error;
mod output;
mod scan;

pub use error::ConfigError;
pub use output::{OutputConfig, OutputFormat};
pub use scan::ScanConfig;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DoclineConfig {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl DoclineConfig {
    /// Load and validate configuration from all sources.
    ///
    /// # Errors
    /// Returns `ConfigError::Figment` if a source cannot be read or merged,
    /// and `ConfigError::InvalidValue` if the merged values are unusable.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Extract and validate configuration from a prepared figment.
    ///
    /// # Errors
    /// Same as [`DoclineConfig::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".docline/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("DOCLINE_").split("__"))
    }

    /// Reject values that would make scanning meaningless.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scan.extensions.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: String::from("scan.extensions"),
                reason: String::from("at least one extension is required"),
            });
        }
        if let Some(bad) = self
            .scan
            .extensions
            .iter()
            .find(|ext| ext.trim_start_matches('.').is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: String::from("scan.extensions"),
                reason: format!("'{bad}' is not a file extension"),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("docline").join("config.toml"))
    }
}
