//! Logging setup for the dashboard.
//!
//! Logs go to the console and to a daily-rotating file in the app data
//! directory. Call [`init`] once at startup, then use the `tracing` macros:
//!
//! ```no_run
//! use podcast_dashboard::logging;
//!
//! logging::init().expect("Failed to initialize logging");
//! tracing::info!("Dashboard started");
//! ```

use anyhow::{Context as _, Result};
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Gets the log directory path based on platform conventions
///
/// Returns:
/// - Windows: `%APPDATA%/podcast-dashboard/logs`
/// - macOS: `~/Library/Application Support/podcast-dashboard/logs`
/// - Linux: `~/.local/share/podcast-dashboard/logs`
pub fn get_log_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_dir().context("Failed to determine data directory")?;
    let log_dir = crate::utils::app_dir(Some(base_dir)).join("logs");

    if !log_dir.exists() {
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    }

    Ok(log_dir)
}

/// Initializes console and file logging.
///
/// The file `podcast-dashboard.<date>.log` rotates daily, keeping 7 files.
/// Level defaults to INFO, override with `RUST_LOG`.
///
/// # Errors
///
/// Returns error if the log directory or the file appender cannot be created
pub fn init() -> Result<()> {
    let log_dir = get_log_dir()?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(7)
        .filename_prefix(crate::utils::APP_DIR_NAME)
        .filename_suffix("log")
        .build(&log_dir)
        .context("Failed to create log file appender")?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("Failed to create env filter")?;

    let stdout_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_file(false)
        .with_writer(std::io::stderr);

    let file_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(false)
        .with_writer(file_appender);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized, log directory: {:?}", log_dir);

    Ok(())
}

/// Console-only logging, used when the log directory is unavailable.
pub fn init_console() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_log_dir() {
        if let Ok(log_dir) = get_log_dir() {
            assert!(log_dir.ends_with("podcast-dashboard/logs") || log_dir.ends_with("podcast-dashboard\\logs"));
        }
    }
}
