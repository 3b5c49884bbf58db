//! Load error types
//!
//! Every variant is fatal: the dashboard has nothing to show without its
//! dataset, so none of these are recovered from.

use thiserror::Error;

/// Errors that can occur while loading the claims CSV
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened
    #[error("Failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file is not well-formed CSV (bad quoting, ragged rows, bad UTF-8)
    #[error("Malformed CSV in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// A required header is absent
    #[error("{path} is missing required column {column:?}")]
    MissingColumn { path: String, column: &'static str },

    /// A claim amount cell is neither blank nor numeric
    #[error("Invalid claim amount {value:?} on line {line} of {path}")]
    InvalidAmount {
        path: String,
        line: u64,
        value: String,
    },
}

impl LoadError {
    /// Path of the file that failed to load
    pub fn path(&self) -> &str {
        match self {
            LoadError::Io { path, .. }
            | LoadError::Csv { path, .. }
            | LoadError::MissingColumn { path, .. }
            | LoadError::InvalidAmount { path, .. } => path,
        }
    }
}
