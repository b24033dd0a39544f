//! File logging.
//!
//! The terminal belongs to the TUI, so log output goes to
//! `$GRADEBOOK_HOME/logs/gradebook.log` through a non-blocking writer.

use std::path::Path;

use anyhow::{Context, Result};
pub use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "GRADEBOOK_LOG";

/// Builds the filter: `GRADEBOOK_LOG`, then `fallback`, then `info`.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber writing to `<log_dir>/gradebook.log`.
///
/// Keep the returned guard alive for the whole process; dropping it flushes
/// and stops the background writer.
pub fn init(log_dir: &Path, level: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("gradebook")
        .filename_suffix("log")
        .build(log_dir)
        .with_context(|| format!("Failed to open log file in {}", log_dir.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;

    tracing::info!(dir = %log_dir.display(), "logging initialized");
    Ok(guard)
}
