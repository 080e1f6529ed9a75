//! Tracing subscriber setup.
//!
//! Text commands log to stderr. The TUI owns the terminal, so while it runs
//! logs go to a file instead.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

fn filter(directive: &str) -> Result<EnvFilter, AppError> {
    EnvFilter::try_new(directive).map_err(|e| AppError::new(2, format!("Invalid log filter '{directive}': {e}")))
}

/// Log to stderr.
pub fn init_stderr(directive: &str) -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(directive)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::new(4, format!("Failed to initialize logging: {e}")))
}

/// Append logs to `path`.
pub fn init_file(directive: &str, path: &Path) -> Result<(), AppError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open log file '{}': {e}", path.display())))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(directive)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::new(4, format!("Failed to initialize logging: {e}")))
}
