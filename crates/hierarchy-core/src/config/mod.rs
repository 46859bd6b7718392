//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from an
//! optional TOML file overlaid with `HIERARCHY__`-prefixed environment
//! variables. Every field has a default, so running without a file is valid.

pub mod logging;
pub mod path;
pub mod sample;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::path::PathConfig;
use self::sample::SampleConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path encoding settings.
    #[serde(default)]
    pub hierarchy: PathConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Sample data shape used when no input collection is supplied.
    #[serde(default)]
    pub sample: SampleConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file and the environment.
    ///
    /// The file is optional. Environment variables use the `HIERARCHY`
    /// prefix and `__` as the section separator, for example
    /// `HIERARCHY__HIERARCHY__BOUNDARY=segment`. The result is not
    /// validated; call [`AppConfig::validate`] before using it.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("HIERARCHY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Parse configuration from an in-memory TOML document.
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        Ok(config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?)
    }

    /// Reject settings the hierarchy cannot work with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.hierarchy.delimiter.is_empty() {
            return Err(AppError::configuration("Path delimiter cannot be empty"));
        }

        if self.sample.organizations == 0 || self.sample.roots == 0 {
            return Err(AppError::configuration(
                "Sample data needs at least one organization and one root",
            ));
        }

        if self.sample.depth > 0 && self.sample.fanout == 0 {
            return Err(AppError::configuration(
                "Sample fanout must be positive when depth is non-zero",
            ));
        }

        Ok(())
    }
}
