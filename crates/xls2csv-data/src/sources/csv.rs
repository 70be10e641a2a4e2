//! Delimited-text data source.

use crate::encoding::TextEncoding;
use crate::error::{DataError, Result};
use crate::sources::{Method, ParseStrategy};
use crate::table::{ConvertOptions, NamedTable, TableConverter};

/// Options for CSV parsing
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Whether to trim whitespace from fields
    pub trim: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            trim: false,
        }
    }
}

/// Delimited text decoded under one fixed encoding
#[derive(Debug, Clone)]
pub struct CsvSource {
    /// Encoding used to decode the raw bytes
    encoding: TextEncoding,
    /// Parsing options
    options: CsvOptions,
}

impl CsvSource {
    /// Create a comma-separated source for the given encoding
    pub fn new(encoding: TextEncoding) -> Self {
        Self::with_options(encoding, CsvOptions::default())
    }

    /// Create a source with custom options
    pub fn with_options(encoding: TextEncoding, options: CsvOptions) -> Self {
        Self { encoding, options }
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Decode and split `bytes` into records
    ///
    /// Records wider than the first (header) record are rejected; narrower
    /// ones are left for the table converter to pad.
    pub fn read_all(&self, bytes: &[u8]) -> Result<Vec<Vec<String>>> {
        let text = self.encoding.decode(bytes)?;

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.options.delimiter)
            .quote(self.options.quote)
            .has_headers(false) // We handle headers ourselves
            .trim(if self.options.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            })
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut result: Vec<Vec<String>> = Vec::new();

        for record in csv_reader.records() {
            let record = record?;

            if let Some(expected) = result.first().map(|header| header.len()) {
                if record.len() > expected {
                    return Err(DataError::RaggedRow {
                        line: record.position().map(|p| p.line()).unwrap_or(0),
                        expected,
                        found: record.len(),
                    });
                }
            }

            result.push(record.iter().map(|s| s.to_string()).collect());
        }

        if result.is_empty() {
            return Err(DataError::EmptyInput);
        }

        Ok(result)
    }
}

impl ParseStrategy for CsvSource {
    fn method(&self) -> Method {
        Method::Delimited(self.encoding)
    }

    fn parse(&self, bytes: &[u8]) -> Result<Vec<NamedTable>> {
        let data = self.read_all(bytes)?;
        let table = TableConverter::convert(data, ConvertOptions::for_delimited());

        Ok(vec![NamedTable { sheet: None, table }])
    }
}
