// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

//! Per-crate debug flags
//!
//! Supports `--debug-petal-genetics`, `--debug-all` and the `PETAL_DEBUG`
//! environment variable.

use std::collections::BTreeSet;
use std::env;

use crate::{crate_target, KNOWN_CRATES};

/// Crates with debug logging switched on
///
/// # Example
/// ```rust
/// use petal_observability::CrateDebugFlags;
///
/// let flags = CrateDebugFlags::from_args(vec!["--debug-petal-catalog".to_string()]);
/// assert!(flags.is_enabled("petal-catalog"));
/// assert_eq!(flags.to_filter_string("warn"), "warn,petal_catalog=debug");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrateDebugFlags {
    pub enabled_crates: BTreeSet<String>,
}

impl CrateDebugFlags {
    /// Collect `--debug-{crate-name}` and `--debug-all` arguments; anything
    /// else is ignored.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut flags = Self::default();
        for arg in args {
            if arg == "--debug-all" {
                flags.enable_all();
            } else if let Some(crate_name) = arg.strip_prefix("--debug-") {
                flags.enable(crate_name);
            }
        }
        flags
    }

    /// Merge a `PETAL_DEBUG` value: `all` or comma-separated crate names
    pub fn apply_env_value(&mut self, value: &str) {
        if value.trim() == "all" {
            self.enable_all();
            return;
        }
        for crate_name in value.split(',').map(str::trim).filter(|c| !c.is_empty()) {
            self.enable(crate_name);
        }
    }

    pub fn enable(&mut self, crate_name: &str) {
        self.enabled_crates.insert(crate_name.to_string());
    }

    pub fn enable_all(&mut self) {
        for crate_name in KNOWN_CRATES {
            self.enable(crate_name);
        }
    }

    pub fn is_enabled(&self, crate_name: &str) -> bool {
        self.enabled_crates.contains(crate_name)
    }

    /// `EnvFilter` directive string: the default level followed by a
    /// `target=debug` directive per enabled crate
    pub fn to_filter_string(&self, default_level: &str) -> String {
        let mut filters = vec![default_level.to_string()];
        for crate_name in &self.enabled_crates {
            filters.push(format!("{}=debug", crate_target(crate_name)));
        }
        filters.join(",")
    }
}

/// Whether an argument is a debug flag (for stripping before argument parsing)
pub fn is_debug_flag(arg: &str) -> bool {
    arg.starts_with("--debug-")
}

/// Debug flags from the process arguments plus `PETAL_DEBUG`
pub fn parse_debug_flags() -> CrateDebugFlags {
    let mut flags = CrateDebugFlags::from_args(env::args());
    if let Ok(value) = env::var("PETAL_DEBUG") {
        flags.apply_env_value(&value);
    }
    flags
}

/// Help text for debug flags
pub fn debug_flags_help() -> String {
    format!(
        r#"Debug Flags:
  --debug-all                    Enable debug logging for all crates
  --debug-{{crate-name}}          Enable debug logging for one crate

Available crates:
  {}

Environment Variable:
  PETAL_DEBUG={{crate-name}}[,{{crate-name}}]  Enable debug for crates (comma-separated)
  PETAL_DEBUG=all                               Enable debug for all crates
"#,
        KNOWN_CRATES.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_crate_flag() {
        let flags = CrateDebugFlags::from_args(vec![
            "breed".to_string(),
            "--debug-petal-genetics".to_string(),
        ]);
        assert!(flags.is_enabled("petal-genetics"));
        assert!(!flags.is_enabled("petal-catalog"));
    }

    #[test]
    fn test_debug_all() {
        let flags = CrateDebugFlags::from_args(vec!["--debug-all".to_string()]);
        for crate_name in KNOWN_CRATES {
            assert!(flags.is_enabled(crate_name), "{} should be enabled", crate_name);
        }
    }

    #[test]
    fn test_env_value() {
        let mut flags = CrateDebugFlags::default();
        flags.apply_env_value(" petal-catalog , ,petal-services");
        assert!(flags.is_enabled("petal-catalog"));
        assert!(flags.is_enabled("petal-services"));
        assert_eq!(flags.enabled_crates.len(), 2);

        let mut all = CrateDebugFlags::default();
        all.apply_env_value("all");
        assert_eq!(all.enabled_crates.len(), KNOWN_CRATES.len());
    }

    #[test]
    fn test_filter_string_uses_targets() {
        let none = CrateDebugFlags::default();
        assert_eq!(none.to_filter_string("info"), "info");

        let flags = CrateDebugFlags::from_args(vec![
            "--debug-petal-services".to_string(),
            "--debug-petal-catalog".to_string(),
        ]);
        assert_eq!(
            flags.to_filter_string("info"),
            "info,petal_catalog=debug,petal_services=debug"
        );
    }

    #[test]
    fn test_is_debug_flag() {
        assert!(is_debug_flag("--debug-all"));
        assert!(!is_debug_flag("--json"));
        assert!(!is_debug_flag("roses"));
    }
}
