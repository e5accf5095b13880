//! Error types for the data-loader crate.
//!
//! Loading a catalog can fail in three ways: the file is not there, reading
//! it fails part-way, or the CSV structure itself is broken (for example a
//! row with an unterminated quote). Missing or unparsable *field values* are
//! not errors; they are defaulted while parsing.

use thiserror::Error;

/// Errors that can occur while loading the movie catalog
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Catalog file could not be found
    #[error("{path} not found.")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The file is not well-formed CSV
    ///
    /// `line` is the 1-based line in the file when the reader knows it.
    #[error("CSV error in {file} at line {line}: {reason}")]
    CsvError {
        file: String,
        line: u64,
        reason: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
