//! # xls2csv-data
//!
//! Convert spreadsheet files to CSV - parse `.xls` sources as workbooks, or
//! as delimited text when they are not, and write one CSV per table.
//!
//! ## Features
//!
//! - **Workbook Support**: BIFF `.xls`, `.xlsx`, `.xlsb` and `.ods` through
//!   `calamine`, detected from file content
//! - **Encoding Fallback**: delimited text under UTF-8, Latin-1 and ISO-8859-1
//! - **Safe Naming**: sheet names sanitized and de-duplicated per workbook
//!
//! ## Example
//!
//! ```rust,ignore
//! use xls2csv_data::Converter;
//!
//! let converter = Converter::new();
//!
//! // One file
//! let conversion = converter.process("report.xls".as_ref())?;
//!
//! // Every `.xls` file in a directory
//! let report = converter.convert_dir(".".as_ref())?;
//! ```

pub mod converter;
pub mod encoding;
pub mod error;
pub mod output;
pub mod sources;
pub mod table;

#[cfg(test)]
mod test_utils;

// Re-exports
pub use converter::{
    BatchReport, Conversion, Converter, FileOutcome, FALLBACK_ENCODINGS, SOURCE_EXTENSION,
};
pub use encoding::TextEncoding;
pub use error::{DataError, Result};
pub use sources::{CsvOptions, CsvSource, ExcelSource, Method, ParseStrategy};
pub use table::{ConvertOptions, NamedTable, Table, TableConverter};
