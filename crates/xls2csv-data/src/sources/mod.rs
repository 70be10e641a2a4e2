//! Parse strategies.
//!
//! Each source turns the raw bytes of a file into one or more tables, or
//! reports why it could not.

pub mod csv;
pub mod excel;

pub use self::csv::{CsvOptions, CsvSource};
pub use self::excel::ExcelSource;

use std::fmt;

use crate::encoding::TextEncoding;
use crate::error::Result;
use crate::table::NamedTable;

/// How a source file was successfully parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Structured workbook, one table per sheet
    Workbook,
    /// Delimited text decoded with the given encoding
    Delimited(TextEncoding),
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Workbook => write!(f, "workbook"),
            Method::Delimited(encoding) => write!(f, "CSV ({})", encoding),
        }
    }
}

/// One way of interpreting a source file's bytes
pub trait ParseStrategy {
    /// The method this strategy reports on success
    fn method(&self) -> Method;

    /// Parse the file contents into tables
    ///
    /// # Arguments
    /// * `bytes` - The complete contents of the source file
    ///
    /// # Returns
    /// The parsed tables, in source order
    fn parse(&self, bytes: &[u8]) -> Result<Vec<NamedTable>>;
}
