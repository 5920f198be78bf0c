// Tracing subscriber setup
//
// The TUI owns stdout, so interactive runs log to a file. Short-lived
// subcommands log warnings to stderr instead.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{self, constants::LOG_FILE_NAME};

/// ~/.teachterm/teachterm.log
pub fn default_log_path() -> Result<PathBuf> {
    Ok(config::config_dir()?.join(LOG_FILE_NAME))
}

/// RUST_LOG wins; otherwise debug when requested, else info
pub fn build_filter(debug: bool) -> EnvFilter {
    let fallback = if debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Subscriber writing plain (non-ANSI) lines to `log_file`
pub fn build_file_subscriber(
    log_file: File,
    filter: EnvFilter,
) -> impl tracing::Subscriber + Send + Sync {
    let fmt_layer = fmt::layer()
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry().with(fmt_layer).with(filter)
}

/// Install the file subscriber globally, creating the parent directory
pub fn init_file_logging(path: &Path, debug: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let log_file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    build_file_subscriber(log_file, build_filter(debug))
        .try_init()
        .context("Tracing subscriber already installed")?;

    tracing::info!(path = %path.display(), "Logging initialized");
    Ok(())
}

/// Warnings and errors to stderr, for non-interactive subcommands
pub fn init_stderr_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
