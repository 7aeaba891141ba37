// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

//! # Petal Configuration
//!
//! Type-safe configuration for petal tools:
//! - TOML file parsing (`petal_configuration.toml`)
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! ## Usage
//!
//! ```rust,no_run
//! use petal_config::{load_config, validate_config};
//!
//! let config = load_config(None, None).expect("Failed to load config");
//! validate_config(&config).expect("Invalid config");
//! println!("Percent precision: {}", config.output.percent_precision);
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{
    apply_cli_overrides, apply_environment_overrides, find_config_file, load_config,
    load_config_or_default, CONFIG_FILE_NAME,
};
pub use types::*;
pub use validation::{
    collect_errors, validate_config, ConfigValidationError, MAX_PERCENT_PRECISION,
    MAX_RETENTION_DAYS,
};

pub use petal_observability::{LogFormat, LoggingConfig};

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found. Searched: {0}")]
    FileNotFound(String),

    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax: {0}")]
    ParseError(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PetalConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.output.percent_precision, 2);
        assert!(config.output.annotate_seed);
        assert_eq!(config.output.order, OutcomeOrder::Genotype);
        assert!(config.catalog.path.is_none());
    }
}
