//! Errors that abort an inverse sieve run.
//!
//! Per-z skips (no square root of 3, no seeds) are not errors; they are
//! reported through [`crate::pipeline::ZOutcome`].

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SieveError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to read config file {path}: {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SieveError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SieveError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SieveError>;
