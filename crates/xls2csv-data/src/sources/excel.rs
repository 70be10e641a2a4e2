//! Workbook data source using calamine.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, ExcelDateTime, Range, Reader};
use tracing::debug;

use crate::error::{DataError, Result};
use crate::sources::{Method, ParseStrategy};
use crate::table::{ConvertOptions, NamedTable, TableConverter};

/// Structured workbook source
///
/// The container format (BIFF `.xls`, `.xlsx`, `.xlsb`, `.ods`) is detected
/// from the bytes, not the file extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExcelSource;

impl ExcelSource {
    pub fn new() -> Self {
        Self
    }

    /// Convert a calamine cell to a string
    fn cell_to_string(cell: &Data) -> String {
        match cell {
            Data::Empty | Data::Error(_) => String::new(),
            Data::String(s) => s.clone(),
            Data::Int(i) => i.to_string(),
            Data::Float(f) => {
                if f.fract() == 0.0 && f.is_finite() {
                    format!("{:.0}", f)
                } else {
                    f.to_string()
                }
            }
            Data::Bool(true) => "True".to_string(),
            Data::Bool(false) => "False".to_string(),
            Data::DateTime(dt) => Self::datetime_to_string(dt),
            Data::DateTimeIso(s) => s.clone(),
            Data::DurationIso(s) => s.clone(),
        }
    }

    /// Render a date- or duration-formatted serial value
    ///
    /// Values that chrono cannot represent keep their serial number.
    fn datetime_to_string(dt: &ExcelDateTime) -> String {
        if dt.is_duration() {
            return match dt.as_duration() {
                Some(d) => {
                    let secs = d.num_seconds();
                    format!("{}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60)
                }
                None => dt.as_f64().to_string(),
            };
        }

        // Serials below one day are times of day with no date part
        let pattern = if dt.as_f64() < 1.0 {
            "%H:%M:%S"
        } else {
            "%Y-%m-%d %H:%M:%S"
        };
        match dt.as_datetime() {
            Some(value) => value.format(pattern).to_string(),
            None => dt.as_f64().to_string(),
        }
    }

    /// Extract every row of a sheet range as strings
    ///
    /// calamine crops the range to the first used cell; rows are shifted back
    /// so column indices count from A.
    fn extract_range_data(sheet_range: &Range<Data>) -> Vec<Vec<String>> {
        let first_col = sheet_range.start().map_or(0, |(_, col)| col as usize);

        sheet_range
            .rows()
            .map(|row| {
                let mut cells = vec![String::new(); first_col];
                cells.extend(row.iter().map(Self::cell_to_string));
                cells
            })
            .collect()
    }
}

impl ParseStrategy for ExcelSource {
    fn method(&self) -> Method {
        Method::Workbook
    }

    fn parse(&self, bytes: &[u8]) -> Result<Vec<NamedTable>> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

        let sheet_names = workbook.sheet_names().to_vec();
        debug!("Workbook has {} sheet(s)", sheet_names.len());

        let mut tables = Vec::with_capacity(sheet_names.len());
        for sheet in sheet_names {
            let sheet_range =
                workbook
                    .worksheet_range(&sheet)
                    .map_err(|e| DataError::SheetRead {
                        sheet: sheet.clone(),
                        reason: e.to_string(),
                    })?;

            let data = Self::extract_range_data(&sheet_range);
            let table = TableConverter::convert(data, ConvertOptions::for_sheet());

            tables.push(NamedTable {
                sheet: Some(sheet),
                table,
            });
        }

        Ok(tables)
    }
}
