//! Tracing subscriber setup.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::config::TuiConfig;

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Sends logs to the configured file so they stay off the terminal UI.
pub fn init_file_logging(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.log_filter()))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Sends logs to stderr, leaving stdout for command output.
pub fn init_stderr_logging(config: &TuiConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.log_filter()))
        .with_writer(std::io::stderr)
        .try_init();
}
