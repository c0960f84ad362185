//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading the dashboard tables.
///
/// A load failure is reported to the user and degrades only the views that
/// depend on the affected table; it is never retried automatically.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("failed to open data file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A row in a CSV table couldn't be parsed
    #[error("failed to parse {file}: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// A constraint or CLI argument named a field that doesn't exist
    #[error("unknown field: {field} (expected actor, genre, director or country)")]
    UnknownField { field: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
