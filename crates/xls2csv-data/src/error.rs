//! Error types for the conversion engine.

use thiserror::Error;

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while parsing or writing a source file
#[derive(Debug, Error)]
pub enum DataError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Source path has no file name to derive output names from
    #[error("Cannot derive an output name from path: {0}")]
    InvalidSourceName(String),

    /// Content is not a recognizable workbook container
    #[error("Failed to open workbook: {0}")]
    WorkbookOpen(String),

    /// A sheet listed by the workbook could not be read
    #[error("Failed to read sheet '{sheet}': {reason}")]
    SheetRead { sheet: String, reason: String },

    /// Bytes are not valid in the requested text encoding
    #[error("Input is not valid {0}")]
    Decode(&'static str),

    /// Delimited input contains no header row
    #[error("No columns to parse from file")]
    EmptyInput,

    /// A data row carries more fields than the header
    #[error("Expected {expected} fields in line {line}, saw {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// CSV reader or writer error
    #[error("CSV error: {0}")]
    Csv(String),

    /// Every delimited-text attempt failed
    #[error("Could not process as CSV with any encoding ({tried})")]
    NoEncodingMatched { tried: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<calamine::Error> for DataError {
    fn from(err: calamine::Error) -> Self {
        DataError::WorkbookOpen(err.to_string())
    }
}

impl From<csv::Error> for DataError {
    fn from(err: csv::Error) -> Self {
        DataError::Csv(err.to_string())
    }
}
