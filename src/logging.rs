//! Diagnostic logging setup.
//!
//! The player owns the terminal, so log output never goes to stdout or
//! stderr. Logging is off unless a log file is given with `--log-file` or
//! `PEDVIEW_LOG_FILE`. The level filter comes from `PEDVIEW_LOG`.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable naming the log file.
pub const LOG_FILE_ENV: &str = "PEDVIEW_LOG_FILE";
/// Environment variable holding the filter directives.
pub const LOG_FILTER_ENV: &str = "PEDVIEW_LOG";

/// Log file from the command line, else from the environment.
pub fn log_file_path(cli_path: Option<&Path>) -> Option<PathBuf> {
    cli_path
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(LOG_FILE_ENV).map(PathBuf::from))
        .filter(|p| !p.as_os_str().is_empty())
}

/// Install the global subscriber writing to `path`.
///
/// A second call is a no-op.
pub fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    Ok(())
}
