//! CSV output: file naming and serialization.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use sanitize_filename::{sanitize_with_options, Options};

use crate::error::{DataError, Result};
use crate::table::{NamedTable, Table};

/// Extension of every written file
pub const OUTPUT_EXTENSION: &str = "csv";

/// Make a sheet name safe to embed in a file name
///
/// Falls back to `sheet<N>` (1-based position) when nothing usable is left.
pub fn sanitize_sheet_name(name: &str, position: usize) -> String {
    let sanitized = sanitize_with_options(
        name,
        Options {
            windows: true,
            truncate: true,
            replacement: "_",
        },
    );

    if sanitized.is_empty() {
        format!("sheet{}", position)
    } else {
        sanitized
    }
}

/// Compute output paths for every table parsed from `source`
///
/// Sheets become `<stem>_<sheet>.csv`, unnamed tables `<stem>.csv`, all in
/// the source's directory. Sheet names that sanitize to the same string get
/// `_2`, `_3`, ... suffixes so no two outputs of one source collide.
pub fn output_paths(source: &Path, tables: &[NamedTable]) -> Result<Vec<PathBuf>> {
    let stem = source
        .file_stem()
        .ok_or_else(|| DataError::InvalidSourceName(source.display().to_string()))?
        .to_string_lossy()
        .into_owned();
    let dir = source.parent().unwrap_or_else(|| Path::new(""));

    let mut used: HashSet<String> = HashSet::new();
    let mut paths = Vec::with_capacity(tables.len());

    for (idx, named) in tables.iter().enumerate() {
        let base = match &named.sheet {
            Some(sheet) => format!("{}_{}", stem, sanitize_sheet_name(sheet, idx + 1)),
            None => stem.clone(),
        };

        let mut file_name = base.clone();
        let mut suffix = 2;
        while !used.insert(file_name.to_lowercase()) {
            file_name = format!("{}_{}", base, suffix);
            suffix += 1;
        }

        paths.push(dir.join(format!("{}.{}", file_name, OUTPUT_EXTENSION)));
    }

    Ok(paths)
}

/// Serialize a table as CSV: header row first, no index column
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    if table.is_empty() {
        fs::write(path, b"")?;
        return Ok(());
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    Ok(())
}
