//! Converter - runs parse strategies over source files and writes CSV output.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::encoding::TextEncoding;
use crate::error::{DataError, Result};
use crate::output::{output_paths, write_table};
use crate::sources::{CsvSource, ExcelSource, Method, ParseStrategy};
use crate::table::NamedTable;

/// Extension (without dot) of files picked up by the directory driver
pub const SOURCE_EXTENSION: &str = "xls";

/// Encodings tried, in order, when the workbook parse fails
pub const FALLBACK_ENCODINGS: [TextEncoding; 3] = [
    TextEncoding::Utf8,
    TextEncoding::Latin1,
    TextEncoding::Iso8859_1,
];

/// A successfully converted source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The file that was read
    pub source: PathBuf,
    /// Which strategy parsed it
    pub method: Method,
    /// Files written, in sheet order
    pub outputs: Vec<PathBuf>,
}

/// Result of processing one file
#[derive(Debug)]
pub struct FileOutcome {
    pub source: PathBuf,
    pub result: Result<Conversion>,
}

/// Per-file outcomes of a directory run, in processing order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    /// Successful conversions
    pub fn converted(&self) -> impl Iterator<Item = &Conversion> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    /// Failed files with their errors
    pub fn failed(&self) -> impl Iterator<Item = (&Path, &DataError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.source.as_path(), e)))
    }

    pub fn has_failures(&self) -> bool {
        self.failed().next().is_some()
    }
}

/// Converts spreadsheet files to CSV
///
/// Strategies are tried in order; the first one that parses the file wins
/// and its tables are written next to the source.
pub struct Converter {
    strategies: Vec<Box<dyn ParseStrategy>>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// Workbook first, then delimited text under each fallback encoding
    pub fn new() -> Self {
        let mut strategies: Vec<Box<dyn ParseStrategy>> = vec![Box::new(ExcelSource::new())];
        for encoding in FALLBACK_ENCODINGS {
            strategies.push(Box::new(CsvSource::new(encoding)));
        }
        Self::with_strategies(strategies)
    }

    /// Use a custom, ordered strategy list
    pub fn with_strategies(strategies: Vec<Box<dyn ParseStrategy>>) -> Self {
        Self { strategies }
    }

    /// Parse `bytes` with the first strategy that succeeds
    pub fn parse(&self, bytes: &[u8]) -> Result<(Method, Vec<NamedTable>)> {
        let mut tried = Vec::new();

        for strategy in &self.strategies {
            let method = strategy.method();
            match strategy.parse(bytes) {
                Ok(tables) => return Ok((method, tables)),
                Err(e) => {
                    debug!("{} parse failed: {}", method, e);
                    if let Method::Delimited(encoding) = method {
                        tried.push(encoding.label());
                    }
                }
            }
        }

        Err(DataError::NoEncodingMatched {
            tried: tried.join(", "),
        })
    }

    /// Convert one source file
    ///
    /// Reads the file once, parses it, then writes every table. Nothing is
    /// written unless a strategy succeeded for the whole file.
    pub fn process(&self, path: &Path) -> Result<Conversion> {
        if !path.exists() {
            return Err(DataError::FileNotFound(path.display().to_string()));
        }

        let bytes = fs::read(path)?;
        let (method, tables) = self.parse(&bytes)?;
        let outputs = output_paths(path, &tables)?;

        for (named, output) in tables.iter().zip(&outputs) {
            write_table(&named.table, output)?;
            info!(
                "Wrote {} ({} columns, {} rows)",
                output.display(),
                named.table.width(),
                named.table.rows.len()
            );
        }

        Ok(Conversion {
            source: path.to_path_buf(),
            method,
            outputs,
        })
    }

    /// List the source files of `dir`, in directory-listing order
    ///
    /// Only regular files whose name ends in `.xls` are returned.
    pub fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let suffix = format!(".{}", SOURCE_EXTENSION);
        let mut files = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                    continue;
                }
            };

            let name = entry.file_name();
            if !name.to_string_lossy().ends_with(&suffix) {
                continue;
            }

            let path = entry.path();
            if path.is_file() {
                files.push(path);
            } else {
                debug!("Skipping non-file {}", path.display());
            }
        }

        Ok(files)
    }

    /// Convert every source file in `dir`, one at a time
    ///
    /// A failing file is logged and recorded; it never stops the run. Only a
    /// failure to list `dir` itself is returned as an error.
    pub fn convert_dir(&self, dir: &Path) -> Result<BatchReport> {
        let mut report = BatchReport::default();

        for source in self.discover(dir)? {
            let result = self.process(&source);
            match &result {
                Ok(conversion) => info!(
                    "Converted {} as {} ({} file(s))",
                    source.display(),
                    conversion.method,
                    conversion.outputs.len()
                ),
                Err(e) => warn!("Failed to process file {}: {}", source.display(), e),
            }
            report.outcomes.push(FileOutcome { source, result });
        }

        Ok(report)
    }
}
