//! Logging setup.
//!
//! Human-readable logs go to stderr. When a log directory or explicit log
//! path is configured, events are also written as JSON lines to a file via a
//! non-blocking appender.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Explicit log file path.
const ENV_LOG_PATH: &str = "STYLOSIG_LOG_PATH";

/// Log directory (daily-rotated files).
const ENV_LOG_DIR: &str = "STYLOSIG_LOG_DIR";

/// File name prefix for rotated log files.
const LOG_FILE_PREFIX: &str = "stylosig.jsonl";

/// Where file logs go, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact file to append to; wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rotated JSONL files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables, letting `log_dir` from the config
    /// file take precedence over `STYLOSIG_LOG_DIR`.
    pub fn from_env_with_overrides(log_dir: Option<PathBuf>) -> Self {
        Self {
            log_path: std::env::var_os(ENV_LOG_PATH).map(PathBuf::from),
            log_dir: log_dir.or_else(|| std::env::var_os(ENV_LOG_DIR).map(PathBuf::from)),
        }
    }

    /// Directory and file name prefix for the file appender.
    fn file_target(&self) -> Option<(PathBuf, String)> {
        if let Some(ref path) = self.log_path {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path.file_name()?.to_string_lossy().into_owned();
            return Some((dir.to_path_buf(), name));
        }
        self.log_dir
            .as_ref()
            .map(|dir| (dir.clone(), LOG_FILE_PREFIX.to_string()))
    }
}

/// Keeps the file appender flushing until dropped.
#[must_use = "dropping the guard stops file logging"]
pub struct ObservabilityGuard {
    _file: Option<WorkerGuard>,
}

/// Build the log filter from CLI flags and the configured level.
///
/// `-q` forces `error`, `-v` forces `debug`, `-vv` and beyond force `trace`.
/// Otherwise `RUST_LOG` wins over the configured level.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Install the global subscriber.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<ObservabilityGuard> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match config.file_target() {
        Some((dir, name)) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = if config.log_path.is_some() {
                tracing_appender::rolling::never(&dir, &name)
            } else {
                tracing_appender::rolling::daily(&dir, &name)
            };
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(ObservabilityGuard { _file: guard })
}
