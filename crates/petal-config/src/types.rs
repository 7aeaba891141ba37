// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! Each struct maps to a table in `petal_configuration.toml`. Every field has
//! a default, so an empty file is a valid configuration.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use petal_observability::LoggingConfig;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PetalConfig {
    pub catalog: CatalogConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Species catalog source
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog TOML file; the built-in catalog when absent
    pub path: Option<PathBuf>,
}

/// How breeding results are presented
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Digits after the decimal point in percentages
    pub percent_precision: usize,
    /// Append " (seed)" to seed-grown phenotypes
    pub annotate_seed: bool,
    pub order: OutcomeOrder,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            percent_precision: 2,
            annotate_seed: true,
            order: OutcomeOrder::Genotype,
        }
    }
}

/// Order of offspring outcomes in a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeOrder {
    /// Packed genotype index order
    #[default]
    Genotype,
    /// Most likely first; ties in genotype order
    Probability,
}

impl OutcomeOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeOrder::Genotype => "genotype",
            OutcomeOrder::Probability => "probability",
        }
    }
}

impl fmt::Display for OutcomeOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutcomeOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "genotype" => Ok(OutcomeOrder::Genotype),
            "probability" => Ok(OutcomeOrder::Probability),
            other => Err(ConfigError::InvalidValue(format!(
                "unknown outcome order {:?} (expected \"genotype\" or \"probability\")",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petal_observability::LogFormat;

    #[test]
    fn test_parse_full_file() {
        let text = r#"
[catalog]
path = "garden.toml"

[output]
percent_precision = 4
annotate_seed = false
order = "probability"

[logging]
level = "debug"
format = "json"
"#;
        let config: PetalConfig = toml::from_str(text).unwrap();
        assert_eq!(config.catalog.path, Some(PathBuf::from("garden.toml")));
        assert_eq!(config.output.percent_precision, 4);
        assert!(!config.output.annotate_seed);
        assert_eq!(config.output.order, OutcomeOrder::Probability);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: PetalConfig = toml::from_str("[output]\norder = \"genotype\"\n").unwrap();
        assert_eq!(config.output, OutputConfig::default());
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_order_from_str() {
        assert_eq!("Probability".parse::<OutcomeOrder>().unwrap(), OutcomeOrder::Probability);
        assert!("random".parse::<OutcomeOrder>().is_err());
    }

    #[test]
    fn test_order_json() {
        let json = serde_json::to_string(&OutcomeOrder::Probability).unwrap();
        assert_eq!(json, "\"probability\"");
    }
}
