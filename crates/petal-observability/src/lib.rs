// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

//! # petal-observability
//!
//! Logging setup shared by petal tools, with per-crate debug flag support.
//!
//! ## Features
//! - `file-logging`: per-run log files with retention cleanup

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod config;
pub mod init;

pub use cli::*;
pub use config::*;
pub use init::*;

/// Workspace crate names accepted by `--debug-<crate>`
pub const KNOWN_CRATES: &[&str] = &[
    "petal",
    "petal-genetics",
    "petal-catalog",
    "petal-services",
    "petal-config",
];

/// Tracing target for a crate name (`petal-genetics` → `petal_genetics`)
pub fn crate_target(crate_name: &str) -> String {
    crate_name.replace('-', "_")
}
