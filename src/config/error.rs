//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Minimum entity count must be at least 2, got {0}")]
    MinEntitiesTooSmall(usize),

    #[error("Maximum {kind} count {max} is below the minimum {min}")]
    MaxBelowMin {
        kind: &'static str,
        min: usize,
        max: usize,
    },

    #[error("Initial {kind} count {count} is outside {min}..={max}")]
    InitialCountOutOfRange {
        kind: &'static str,
        count: usize,
        min: usize,
        max: usize,
    },

    #[error("Consistency threshold must be in (0, 1], got {0}")]
    InvalidConsistencyThreshold(f64),

    #[error("Log level filter cannot be empty")]
    EmptyLogLevel,
}
