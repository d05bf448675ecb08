//! tracing-subscriber setup. The TUI owns stdout, so it logs to a file;
//! one-shot commands log to stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid log filter '{filter}': {message}")]
    InvalidFilter { filter: String, message: String },
    #[error("Could not open log file {path}: {message}")]
    File { path: String, message: String },
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// `<data dir>/lensql/lensql.log`, or `./lensql.log` without a data dir.
pub fn default_log_file() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("lensql"))
        .unwrap_or_default()
        .join("lensql.log")
}

/// Builds the filter from `level` plus quiet defaults for the HTTP stack.
/// `RUST_LOG` wins when set.
pub fn build_env_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let mut directives = vec![level.to_string()];
    let noisy = [
        ("hyper", "warn"),
        ("hyper_util", "warn"),
        ("reqwest", "warn"),
        ("rustls", "warn"),
    ];
    for (target, lvl) in noisy {
        directives.push(format!("{target}={lvl}"));
    }
    let filter = directives.join(",");
    EnvFilter::try_new(&filter).map_err(|e| LoggingError::InvalidFilter {
        filter,
        message: e.to_string(),
    })
}

pub fn init_logging(level: &str, target: &LogTarget) -> Result<(), LoggingError> {
    let filter = build_env_filter(level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    result.map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}

fn open_log_file(path: &Path) -> Result<fs::File, LoggingError> {
    let file_error = |e: std::io::Error| LoggingError::File {
        path: path.display().to_string(),
        message: e.to_string(),
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(file_error)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(file_error)
}
