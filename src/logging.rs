//! Optional file logging.
//!
//! The game owns the terminal, so log output never goes to stdout or stderr.
//! Nothing is logged unless a log file is requested.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "roshambo=debug";

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to create log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to install log subscriber: {0}")]
    Subscriber(String),
}

impl From<SetupError> for io::Error {
    fn from(err: SetupError) -> Self {
        io::Error::new(io::ErrorKind::Other, err)
    }
}

/// Filter from `RUST_LOG`, falling back to debug for this crate.
fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Send all `tracing` output to `path`, truncating it.
pub fn init_file_logging(path: &Path) -> Result<(), SetupError> {
    let file = File::create(path).map_err(|source| SetupError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| SetupError::Subscriber(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}
