//! Table model - transforms raw records into rectangular, named-column tables.

use std::collections::HashMap;

/// A rectangular dataset: named columns and rows of equal width
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Column names, taken from the header record
    pub headers: Vec<String>,
    /// Data rows, each exactly `headers.len()` cells wide
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Number of columns
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// True when the table has no columns at all
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

/// A table tagged with the sheet it came from (`None` for delimited text)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedTable {
    pub sheet: Option<String>,
    pub table: Table,
}

/// Options for table conversion
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Drop records whose cells are all empty
    pub skip_empty_rows: bool,
}

impl ConvertOptions {
    /// Options used for workbook sheets
    pub fn for_sheet() -> Self {
        Self {
            skip_empty_rows: true,
        }
    }

    /// Options used for delimited text
    pub fn for_delimited() -> Self {
        Self::default()
    }
}

/// Converts raw record data to a [`Table`]
pub struct TableConverter;

impl TableConverter {
    /// Convert raw 2D string data to a table
    ///
    /// The first retained record becomes the header row. Short rows are
    /// padded with empty cells; if any row is wider than the header, extra
    /// columns are added with generated names.
    pub fn convert(data: Vec<Vec<String>>, options: ConvertOptions) -> Table {
        let mut records = data
            .into_iter()
            .filter(|row| !(options.skip_empty_rows && row.iter().all(|c| c.is_empty())));

        let header = match records.next() {
            Some(header) => header,
            None => return Table::default(),
        };
        let body: Vec<Vec<String>> = records.collect();

        let num_cols = body
            .iter()
            .map(|row| row.len())
            .chain(std::iter::once(header.len()))
            .max()
            .unwrap_or(0);

        let headers = Self::normalize_headers(header, num_cols);
        let rows = body
            .into_iter()
            .map(|row| Self::create_row(row, num_cols))
            .collect();

        Table { headers, rows }
    }

    /// Pad a row with empty cells up to `num_cols`
    fn create_row(mut data: Vec<String>, num_cols: usize) -> Vec<String> {
        data.resize(num_cols, String::new());
        data
    }

    /// Name blank columns `Unnamed: i` and suffix repeated names with `.N`
    fn normalize_headers(mut header: Vec<String>, num_cols: usize) -> Vec<String> {
        header.resize(num_cols, String::new());

        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut result = Vec::with_capacity(num_cols);

        for (idx, name) in header.into_iter().enumerate() {
            let mut col = if name.is_empty() {
                format!("Unnamed: {}", idx)
            } else {
                name
            };

            let mut current = counts.get(&col).copied().unwrap_or(0);
            while current > 0 {
                counts.insert(col.clone(), current + 1);
                col = format!("{}.{}", col, current);
                current = counts.get(&col).copied().unwrap_or(0);
            }
            counts.insert(col.clone(), current + 1);
            result.push(col);
        }

        result
    }
}
