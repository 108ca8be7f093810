//! Log setup for the terminal binary
//!
//! The TUI owns stdout and stderr while it runs, so all `tracing` output goes to a
//! file. Library code only emits events; it never installs a subscriber.

use crate::errors::AppError;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber writing to `path`.
///
/// `filter` uses `EnvFilter` syntax (`"debug"`, `"clecture=trace"`). When it is `None`
/// the `RUST_LOG` environment variable is used, falling back to `info`.
pub fn init(path: &Path, filter: Option<&str>) -> Result<(), AppError> {
    let file = File::create(path)?;

    let filter = match filter {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| AppError::Logging(format!("invalid filter '{}': {}", directives, e)))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
