//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DECISION_MATRIX_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use decision_matrix::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let validator = config.analysis.validator();
//! ```

mod analysis;
mod error;
mod logging;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "DECISION_MATRIX";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration (filter directive, output format)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Validator tunables
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DECISION_MATRIX` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `DECISION_MATRIX__LOGGING__FORMAT=json` -> `logging.format = json`
    /// - `DECISION_MATRIX__ANALYSIS__DOMINANCE_THRESHOLD=0.8` -> `analysis.dominance_threshold = 0.8`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables layered on top
    ///
    /// The file format is inferred from its extension (`.toml`, `.yaml`, `.json`).
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.analysis.validate()?;
        Ok(())
    }
}

fn environment() -> config::Environment {
    config::Environment::default()
        .prefix(ENV_PREFIX)
        .separator("__")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("DECISION_MATRIX__LOGGING__LEVEL");
        env::remove_var("DECISION_MATRIX__LOGGING__FORMAT");
        env::remove_var("DECISION_MATRIX__ANALYSIS__DOMINANCE_THRESHOLD");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.analysis.dominance_threshold, 0.75);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DECISION_MATRIX__LOGGING__FORMAT", "json");
        env::set_var("DECISION_MATRIX__ANALYSIS__DOMINANCE_THRESHOLD", "0.8");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.analysis.dominance_threshold, 0.8);
    }

    #[test]
    fn test_invalid_threshold_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DECISION_MATRIX__ANALYSIS__DOMINANCE_THRESHOLD", "1.5");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidDominanceThreshold(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[logging]\nlevel = \"warn\"\n\n[analysis]\ndominance_threshold = 0.9"
        )
        .unwrap();

        let config = AppConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.analysis.dominance_threshold, 0.9);
    }

    #[test]
    fn test_environment_overrides_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[analysis]\ndominance_threshold = 0.9").unwrap();

        env::set_var("DECISION_MATRIX__ANALYSIS__DOMINANCE_THRESHOLD", "0.6");
        let result = AppConfig::load_from_file(file.path());
        clear_env();

        assert_eq!(result.unwrap().analysis.dominance_threshold, 0.6);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let result = AppConfig::load_from_file("/nonexistent/decision-matrix.toml");
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
