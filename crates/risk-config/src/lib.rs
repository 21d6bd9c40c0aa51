//! # risk-config
//!
//! Layered configuration loading for riskgen using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`RISKGEN_*` prefix, `__` as separator)
//! 2. An explicit config file passed by the caller (`--config`)
//! 3. Project-level `.riskgen/config.toml`
//! 4. User-level `~/.config/riskgen/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `RISKGEN_GENERATION__COUNT` -> `generation.count`,
//! `RISKGEN_OUTPUT__DIR` -> `output.dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use risk_config::RiskConfig;
//!
//! let config = RiskConfig::load_with_dotenv(None).expect("config");
//! println!("generating {} records", config.generation.count);
//! ```

mod error;
mod generation;
mod output;
mod report;

pub use error::ConfigError;
pub use generation::GenerationConfig;
pub use output::OutputConfig;
pub use report::ReportConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "RISKGEN_";

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".riskgen/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RiskConfig {
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl RiskConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] when `config_file` does not exist,
    /// [`ConfigError::Figment`] on parse/extract failures and
    /// [`ConfigError::InvalidValue`] when output names are unusable.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ConfigError::MissingFile {
                    path: path.display().to_string(),
                });
            }
        }

        let config: Self = Self::figment(config_file).extract()?;
        config.output.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(config_file)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers on top.
    #[must_use]
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("riskgen").join("config.toml"))
    }
}
