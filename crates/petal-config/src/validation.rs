// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! All problems are collected and reported together.

use petal_observability::{LoggingConfig, LOG_LEVELS};

use crate::{ConfigError, ConfigResult, PetalConfig};

/// Largest supported `output.percent_precision`
pub const MAX_PERCENT_PRECISION: usize = 6;

/// Largest supported `logging.retention_days` (about a century)
pub const MAX_RETENTION_DAYS: u64 = 36_500;

/// Validation errors that can occur during config validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    MissingRequired { field: String },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequired { field } => {
                write!(f, "Missing required configuration: {}", field)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every problem found
pub fn validate_config(config: &PetalConfig) -> ConfigResult<()> {
    let errors = collect_errors(config);
    if errors.is_empty() {
        return Ok(());
    }

    let error_messages = errors
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::ValidationError(format!(
        "Configuration validation failed:\n{}",
        error_messages
    )))
}

/// Every validation problem in `config`
pub fn collect_errors(config: &PetalConfig) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();
    validate_catalog(config, &mut errors);
    validate_output(config, &mut errors);
    validate_logging(config, &mut errors);
    errors
}

fn validate_catalog(config: &PetalConfig, errors: &mut Vec<ConfigValidationError>) {
    if let Some(path) = &config.catalog.path {
        if path.as_os_str().is_empty() {
            errors.push(ConfigValidationError::MissingRequired {
                field: "catalog.path".to_string(),
            });
        }
    }
}

fn validate_output(config: &PetalConfig, errors: &mut Vec<ConfigValidationError>) {
    if config.output.percent_precision > MAX_PERCENT_PRECISION {
        errors.push(ConfigValidationError::InvalidValue {
            field: "output.percent_precision".to_string(),
            reason: format!(
                "{} is above the maximum of {}",
                config.output.percent_precision, MAX_PERCENT_PRECISION
            ),
        });
    }
}

fn validate_logging(config: &PetalConfig, errors: &mut Vec<ConfigValidationError>) {
    if !LoggingConfig::is_known_level(&config.logging.level) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.level".to_string(),
            reason: format!(
                "{:?} is not one of {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }
    if config.logging.retention_days > MAX_RETENTION_DAYS {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.retention_days".to_string(),
            reason: format!(
                "{} is above the maximum of {}",
                config.logging.retention_days, MAX_RETENTION_DAYS
            ),
        });
    }
    if config.logging.retention_runs == 0 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.retention_runs".to_string(),
            reason: "must keep at least the current run".to_string(),
        });
    }
}
