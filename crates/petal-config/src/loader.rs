// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! Three tiers, later ones winning:
//! 1. TOML file
//! 2. Environment variables
//! 3. CLI arguments

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{ConfigError, ConfigResult, OutcomeOrder, PetalConfig};

/// File name searched for in the working directory and its parents
pub const CONFIG_FILE_NAME: &str = "petal_configuration.toml";

/// Find the configuration file
///
/// Search order:
/// 1. `PETAL_CONFIG_PATH` environment variable
/// 2. `./petal_configuration.toml`
/// 3. Parent directories, up to five levels
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("PETAL_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by PETAL_CONFIG_PATH not found: {}",
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));
        search_paths.extend(
            cwd.ancestors()
                .skip(1)
                .take(5)
                .map(|dir| dir.join(CONFIG_FILE_NAME)),
        );
    }

    if let Some(path) = search_paths.iter().find(|p| p.exists()) {
        return Ok(path.clone());
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "'{}' not found in any of these locations:\n{}\n\nSet PETAL_CONFIG_PATH to specify a custom location.",
        CONFIG_FILE_NAME, search_list
    )))
}

/// Load configuration from a TOML file and apply overrides
///
/// * `config_path` - Config file; searched for with [`find_config_file`] when `None`
/// * `cli_args` - Optional CLI argument overrides
///
/// The result is not validated; call [`crate::validate_config`] afterwards.
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<PetalConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };
    debug!(path = %config_file.display(), "loading configuration");

    let content = fs::read_to_string(&config_file)?;
    let mut config: PetalConfig = toml::from_str(&content)?;

    apply_environment_overrides(&mut config);
    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    Ok(config)
}

/// Like [`load_config`], but a config file that cannot be found (and was not
/// named explicitly) yields the defaults with overrides applied
pub fn load_config_or_default(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<PetalConfig> {
    if config_path.is_some() {
        return load_config(config_path, cli_args);
    }
    match find_config_file() {
        Ok(path) => load_config(Some(&path), cli_args),
        Err(ConfigError::FileNotFound(_)) => {
            debug!("no configuration file found, using defaults");
            let mut config = PetalConfig::default();
            apply_environment_overrides(&mut config);
            if let Some(cli) = cli_args {
                apply_cli_overrides(&mut config, cli);
            }
            Ok(config)
        }
        Err(e) => Err(e),
    }
}

/// Apply environment variable overrides
///
/// Supported variables:
/// - `PETAL_CATALOG_PATH` -> `catalog.path`
/// - `PETAL_PERCENT_PRECISION` -> `output.percent_precision`
/// - `PETAL_ANNOTATE_SEED` -> `output.annotate_seed`
/// - `PETAL_OUTPUT_ORDER` -> `output.order`
/// - `PETAL_LOG_LEVEL` -> `logging.level`
///
/// Values that do not parse are ignored with a warning.
pub fn apply_environment_overrides(config: &mut PetalConfig) {
    let vars: HashMap<&str, String> = [
        ("catalog_path", "PETAL_CATALOG_PATH"),
        ("percent_precision", "PETAL_PERCENT_PRECISION"),
        ("annotate_seed", "PETAL_ANNOTATE_SEED"),
        ("order", "PETAL_OUTPUT_ORDER"),
        ("log_level", "PETAL_LOG_LEVEL"),
    ]
    .into_iter()
    .filter_map(|(key, var)| env::var(var).ok().map(|value| (key, value)))
    .collect();

    for (key, value) in vars {
        apply_override(config, key, &value);
    }
}

/// Apply CLI argument overrides
///
/// Keys: `catalog_path`, `percent_precision`, `annotate_seed`, `order`,
/// `log_level`. Unknown keys are ignored.
pub fn apply_cli_overrides(config: &mut PetalConfig, cli_args: &HashMap<String, String>) {
    for (key, value) in cli_args {
        apply_override(config, key, value);
    }
}

fn apply_override(config: &mut PetalConfig, key: &str, value: &str) {
    match key {
        "catalog_path" => config.catalog.path = Some(PathBuf::from(value)),
        "percent_precision" => match value.trim().parse::<usize>() {
            Ok(precision) => config.output.percent_precision = precision,
            Err(_) => warn!(key, value, "ignoring non-numeric precision override"),
        },
        "annotate_seed" => match parse_bool(value) {
            Some(annotate) => config.output.annotate_seed = annotate,
            None => warn!(key, value, "ignoring non-boolean override"),
        },
        "order" => match value.parse::<OutcomeOrder>() {
            Ok(order) => config.output.order = order,
            Err(e) => warn!(key, value, error = %e, "ignoring order override"),
        },
        "log_level" => config.logging.level = value.to_string(),
        _ => debug!(key, "ignoring unknown override"),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
