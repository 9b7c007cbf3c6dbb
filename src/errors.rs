//! Unified application error type.
//! Every layer (store, core, config, cli) returns AppError so failures reach
//! the caller of a save action unchanged.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    /// The log store could not be created or appended to.
    #[error("Cannot write log store {}: {source}", .path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Runner
    // ---------------------------
    #[error("Event channel closed: {0}")]
    Channel(String),
}

impl AppError {
    /// Wrap an I/O error raised while touching the log store at `path`.
    pub fn io_failure(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::IoFailure {
            path: path.into(),
            source,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
