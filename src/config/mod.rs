//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AHP_SHERPA` prefix and nested values use double underscores as separators.
//!
//! Every section has defaults, so an empty environment yields the standard
//! AHP setup: 2..=10 criteria, 2..=15 alternatives, CR threshold 0.10.
//!
//! # Example
//!
//! ```no_run
//! use ahp_sherpa::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Up to {} criteria", config.limits.max_criteria);
//! ```

mod analysis;
mod error;
mod limits;
mod logging;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use limits::LimitsConfig;
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Entity count limits (criteria, alternatives)
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Consistency threshold and cell input policy
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AHP_SHERPA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AHP_SHERPA__LIMITS__MAX_CRITERIA=8` -> `limits.max_criteria = 8`
    /// - `AHP_SHERPA__ANALYSIS__INPUT_POLICY=positive_real` -> `analysis.input_policy`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AHP_SHERPA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.limits.validate()?;
        self.analysis.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::InputPolicy;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("AHP_SHERPA__LIMITS__MAX_CRITERIA");
        env::remove_var("AHP_SHERPA__LIMITS__MAX_ALTERNATIVES");
        env::remove_var("AHP_SHERPA__ANALYSIS__CONSISTENCY_THRESHOLD");
        env::remove_var("AHP_SHERPA__ANALYSIS__INPUT_POLICY");
        env::remove_var("AHP_SHERPA__LOGGING__JSON");
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.limits.max_criteria, 10);
        assert_eq!(config.limits.max_alternatives, 15);
        assert_eq!(config.analysis.consistency_threshold, 0.10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_SHERPA__LIMITS__MAX_CRITERIA", "6");
        env::set_var("AHP_SHERPA__ANALYSIS__CONSISTENCY_THRESHOLD", "0.2");
        env::set_var("AHP_SHERPA__ANALYSIS__INPUT_POLICY", "positive_real");
        env::set_var("AHP_SHERPA__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.limits.max_criteria, 6);
        assert_eq!(config.analysis.consistency_threshold, 0.2);
        assert_eq!(config.analysis.input_policy, InputPolicy::PositiveReal);
        assert!(config.logging.json);
    }

    #[test]
    fn test_load_validated_rejects_bad_limits() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_SHERPA__LIMITS__MAX_ALTERNATIVES", "1");
        let result = AppConfig::load_validated();
        clear_env();

        assert!(matches!(result, Err(ConfigError::ValidationFailed(_))));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
