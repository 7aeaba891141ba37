// Copyright 2025 Petal Garden Tools
// SPDX-License-Identifier: Apache-2.0

//! Logging initialization
//!
//! Console output always goes to stderr so stdout stays free for results.
//! With the `file-logging` feature and a `log_dir`, each run also writes
//! JSON logs into its own timestamped folder:
//! ```text
//! ./logs/
//!   └── run_20250101_120000/
//!       ├── petal-genetics.log
//!       ├── petal-catalog.log
//!       └── petal.log (combined)
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::cli::CrateDebugFlags;
use crate::config::{LogFormat, LoggingConfig};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Keeps file writers alive; logs are flushed when dropped
pub struct LoggingGuard {
    #[cfg(feature = "file-logging")]
    _file_guards: Vec<tracing_appender::non_blocking::WorkerGuard>,
    log_dir: Option<PathBuf>,
}

impl LoggingGuard {
    /// Run folder holding this run's log files, if file logging is active
    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }
}

/// Filter directives: `RUST_LOG` when set, otherwise the configured level
/// plus per-crate debug flags
pub fn filter_directives(debug_flags: &CrateDebugFlags, config: &LoggingConfig) -> String {
    match std::env::var("RUST_LOG") {
        Ok(directives) if !directives.trim().is_empty() => directives,
        _ => debug_flags.to_filter_string(&config.level.to_ascii_lowercase()),
    }
}

/// Install the global tracing subscriber
///
/// Fails if the filter does not parse, the log directory cannot be created,
/// or a subscriber is already installed.
pub fn init_logging(debug_flags: &CrateDebugFlags, config: &LoggingConfig) -> Result<LoggingGuard> {
    let directives = filter_directives(debug_flags, config);
    let make_filter = || {
        EnvFilter::try_new(&directives)
            .with_context(|| format!("Invalid log filter: {}", directives))
    };

    let mut layers: Vec<BoxedLayer> = Vec::new();

    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    let console: BoxedLayer = match config.format {
        LogFormat::Text => console.with_filter(make_filter()?).boxed(),
        LogFormat::Json => console.json().with_filter(make_filter()?).boxed(),
    };
    layers.push(console);

    #[cfg(feature = "file-logging")]
    let (file_guards, log_dir) = match &config.log_dir {
        Some(base) => {
            let (file_layers, guards, run_folder) = file_layers(base, config, &make_filter)?;
            layers.extend(file_layers);
            (guards, Some(run_folder))
        }
        None => (Vec::new(), None),
    };

    #[cfg(not(feature = "file-logging"))]
    let log_dir: Option<PathBuf> = None;

    Registry::default()
        .with(layers)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    if cfg!(not(feature = "file-logging")) {
        if let Some(dir) = &config.log_dir {
            tracing::warn!(
                log_dir = %dir.display(),
                "log_dir is set but file logging is not compiled in"
            );
        }
    }

    Ok(LoggingGuard {
        #[cfg(feature = "file-logging")]
        _file_guards: file_guards,
        log_dir,
    })
}

#[cfg(feature = "file-logging")]
fn file_layers(
    base_log_dir: &Path,
    config: &LoggingConfig,
    make_filter: &dyn Fn() -> Result<EnvFilter>,
) -> Result<(
    Vec<BoxedLayer>,
    Vec<tracing_appender::non_blocking::WorkerGuard>,
    PathBuf,
)> {
    use tracing_appender::rolling;

    let timestamp = chrono::Utc::now().format(RUN_TIMESTAMP_FORMAT);
    let run_folder = base_log_dir.join(format!("run_{}", timestamp));
    std::fs::create_dir_all(&run_folder)
        .with_context(|| format!("Failed to create log directory: {}", run_folder.display()))?;

    cleanup_old_logs(base_log_dir, config.retention_days, config.retention_runs)?;

    let mut layers: Vec<BoxedLayer> = Vec::new();
    let mut guards = Vec::new();

    for crate_name in crate::KNOWN_CRATES {
        let appender = rolling::never(&run_folder, format!("{}.log", crate_name));
        let (writer, guard) = tracing_appender::non_blocking(appender);
        guards.push(guard);

        let target_filter = EnvFilter::try_new(format!("{}=debug", crate::crate_target(crate_name)))
            .with_context(|| format!("Invalid log filter for {}", crate_name))?;
        layers.push(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .json()
                .with_filter(target_filter)
                .boxed(),
        );
    }

    let combined = rolling::never(&run_folder, "petal.log");
    let (writer, guard) = tracing_appender::non_blocking(combined);
    guards.push(guard);
    layers.push(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .with_filter(make_filter()?)
            .boxed(),
    );

    Ok((layers, guards, run_folder))
}

#[cfg(feature = "file-logging")]
const RUN_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Remove run folders older than `retention_days`, then the oldest ones
/// beyond `retention_runs`
#[cfg(feature = "file-logging")]
pub fn cleanup_old_logs(
    base_log_dir: &Path,
    retention_days: u64,
    retention_runs: usize,
) -> Result<()> {
    use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

    if !base_log_dir.exists() {
        return Ok(());
    }

    // no age limit when the window does not fit a timestamp
    let cutoff = i64::try_from(retention_days)
        .ok()
        .and_then(chrono::Duration::try_days)
        .and_then(|age| Utc::now().checked_sub_signed(age));

    let mut runs: Vec<(PathBuf, DateTime<Utc>)> = Vec::new();
    for entry in std::fs::read_dir(base_log_dir)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }
        let started = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_prefix("run_"))
            .and_then(|ts| NaiveDateTime::parse_from_str(ts, RUN_TIMESTAMP_FORMAT).ok());
        if let Some(naive) = started {
            runs.push((path, Utc.from_utc_datetime(&naive)));
        }
    }

    // oldest first
    runs.sort_by_key(|(_, started)| *started);

    let (expired, kept): (Vec<_>, Vec<_>) = runs
        .into_iter()
        .partition(|(_, started)| cutoff.is_some_and(|c| *started < c));
    let excess = kept.len().saturating_sub(retention_runs);

    for (path, _) in expired.iter().chain(kept.iter().take(excess)) {
        if let Err(e) = std::fs::remove_dir_all(path) {
            eprintln!("Warning: Failed to remove old log directory {}: {}", path.display(), e);
        }
    }

    Ok(())
}

#[cfg(all(test, feature = "file-logging"))]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_keeps_recent_runs() {
        let dir = tempfile::tempdir().unwrap();
        let now = chrono::Utc::now();
        let mut names = Vec::new();
        for minutes in 0..4 {
            let ts = (now - chrono::Duration::minutes(minutes)).format(RUN_TIMESTAMP_FORMAT);
            let name = format!("run_{}", ts);
            std::fs::create_dir_all(dir.path().join(&name)).unwrap();
            names.push(name);
        }
        let ancient = "run_20000101_000000";
        std::fs::create_dir_all(dir.path().join(ancient)).unwrap();
        std::fs::create_dir_all(dir.path().join("not_a_run")).unwrap();

        cleanup_old_logs(dir.path(), 30, 2).unwrap();

        assert!(!dir.path().join(ancient).exists());
        assert!(dir.path().join(&names[0]).exists());
        assert!(dir.path().join(&names[1]).exists());
        assert!(!dir.path().join(&names[3]).exists());
        assert!(dir.path().join("not_a_run").exists());
    }

    #[test]
    fn test_cleanup_huge_retention_window() {
        let dir = tempfile::tempdir().unwrap();
        let ancient = "run_20000101_000000";
        std::fs::create_dir_all(dir.path().join(ancient)).unwrap();

        cleanup_old_logs(dir.path(), u64::MAX, 5).unwrap();
        cleanup_old_logs(dir.path(), 200_000_000_000_000, 5).unwrap();

        assert!(dir.path().join(ancient).exists());
    }
}
