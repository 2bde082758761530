//! FILENAME: app/src/error.rs

use persistence::{LoadError, SaveError};
use std::path::PathBuf;
use thiserror::Error;

/// An operation was asked for in a state that cannot serve it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("No data loaded. Load a ledger file first")]
    NoTable,

    #[error("No columns selected")]
    NoColumnsSelected,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Save(#[from] SaveError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error("Failed to read config file '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write config file '{}': {source}", path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create log file '{}': {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render report: {0}")]
    Report(#[from] serde_json::Error),
}
