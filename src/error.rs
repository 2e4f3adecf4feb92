//! Error types for the Strigil library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`StrigilError`] enum. Request-level failures (empty input, unsupported
//! file type, missing column) surface immediately through `?`; row-level
//! decode failures inside a batch are converted into per-row outcomes and
//! never abort the batch (see [`crate::batch`]).
//!
//! # Examples
//!
//! ```
//! use strigil::error::{Result, StrigilError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(StrigilError::missing_column("body"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Strigil operations.
#[derive(Error, Debug)]
pub enum StrigilError {
    /// I/O errors (reading uploaded files, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No text was supplied to the single-text path.
    #[error("no text supplied: input is empty after trimming")]
    EmptyInput,

    /// The uploaded file's extension is not one of the supported kinds.
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// The selected column is absent from the delimited file's header.
    #[error("column '{0}' not found in header")]
    MissingColumn(String),

    /// A single row or line of a batch could not be decoded.
    ///
    /// Recoverable at row granularity: the batch runner reports it inline
    /// and continues with the remaining rows.
    #[error("row {row} could not be decoded: {reason}")]
    RowDecode { row: usize, reason: String },

    /// Analysis-related errors (tokenization, filtering)
    #[error("analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with StrigilError.
pub type Result<T> = std::result::Result<T, StrigilError>;

impl StrigilError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        StrigilError::Analysis(msg.into())
    }

    /// Create a new unsupported-file-type error.
    pub fn unsupported_file_type<S: Into<String>>(name: S) -> Self {
        StrigilError::UnsupportedFileType(name.into())
    }

    /// Create a new missing-column error.
    pub fn missing_column<S: Into<String>>(column: S) -> Self {
        StrigilError::MissingColumn(column.into())
    }

    /// Create a new row-decode error.
    pub fn row_decode<S: Into<String>>(row: usize, reason: S) -> Self {
        StrigilError::RowDecode {
            row,
            reason: reason.into(),
        }
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        StrigilError::Other(msg.into())
    }
}
