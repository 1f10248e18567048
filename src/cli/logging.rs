//! Logging initialization

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Initialize logging based on debug flag
///
/// Logs go to a temporary file so stdout stays clean for graph output.
/// `default_level` is used when RUST_LOG is unset.
/// Returns the log file path if debug logging is enabled.
pub fn init_logging(debug: bool, default_level: &str) -> Result<Option<PathBuf>> {
    if !debug {
        // No logging by default (silent operation)
        return Ok(None);
    }

    // Use Builder to create a named temp file that persists after exit
    let log_path = tempfile::Builder::new()
        .prefix("manifest-grapher-")
        .suffix(".log")
        .tempfile()
        .and_then(|f| f.keep().map_err(|e| e.error))
        .map(|(_, path)| path)
        .unwrap_or_else(|_| {
            // Fallback: create file directly in temp_dir
            std::env::temp_dir().join(format!("manifest-grapher-{}.log", std::process::id()))
        });

    let file = std::fs::OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(file)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_ansi(false) // No ANSI codes in log file
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    Ok(Some(log_path))
}
