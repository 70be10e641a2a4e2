//! Shared test utilities for xls2csv-data
//!
//! Builds small OOXML workbooks in memory so tests don't need binary fixtures.

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;
use zip::ZipWriter;

/// Escape text for use in XML content and attribute values
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Convert a 0-indexed column number to letters (0 = A, 26 = AA)
fn column_name(mut idx: usize) -> String {
    let mut name = String::new();
    loop {
        name.insert(0, (b'A' + (idx % 26) as u8) as char);
        if idx < 26 {
            break;
        }
        idx = idx / 26 - 1;
    }
    name
}

/// Render one `<c>` element
///
/// A `date:`, `duration:`, `bool:` or `error:` prefix picks a styled or
/// typed cell; otherwise numeric-looking values are numbers and everything
/// else is an inline string.
fn cell_xml(cell_ref: &str, value: &str) -> String {
    if let Some(serial) = value.strip_prefix("date:") {
        format!(r#"<c r="{}" s="1"><v>{}</v></c>"#, cell_ref, serial)
    } else if let Some(serial) = value.strip_prefix("duration:") {
        format!(r#"<c r="{}" s="2"><v>{}</v></c>"#, cell_ref, serial)
    } else if let Some(flag) = value.strip_prefix("bool:") {
        format!(r#"<c r="{}" t="b"><v>{}</v></c>"#, cell_ref, flag)
    } else if let Some(code) = value.strip_prefix("error:") {
        format!(r#"<c r="{}" t="e"><v>{}</v></c>"#, cell_ref, escape(code))
    } else if value.parse::<f64>().is_ok() {
        format!(r#"<c r="{}"><v>{}</v></c>"#, cell_ref, value)
    } else {
        format!(
            r#"<c r="{}" t="inlineStr"><is><t>{}</t></is></c>"#,
            cell_ref,
            escape(value)
        )
    }
}

/// Render one worksheet part; empty cells are omitted
fn sheet_xml(rows: &[Vec<&str>]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );

    for (r, row) in rows.iter().enumerate() {
        xml.push_str(&format!(r#"<row r="{}">"#, r + 1));
        for (c, value) in row.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            let cell_ref = format!("{}{}", column_name(c), r + 1);
            xml.push_str(&cell_xml(&cell_ref, value));
        }
        xml.push_str("</row>");
    }

    xml.push_str("</sheetData></worksheet>");
    xml
}

/// Cell styles: 0 general, 1 built-in date (14), 2 built-in `[h]:mm:ss` (46).
/// calamine only reads non-empty `<xf>` elements.
const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><cellXfs count="3"><xf numFmtId="0"></xf><xf numFmtId="14"></xf><xf numFmtId="46"></xf></cellXfs></styleSheet>"#;

/// Create a minimal XLSX workbook with the given sheets, in order
///
/// # Example
/// ```ignore
/// let bytes = build_workbook(&[("Data", vec![vec!["Name"], vec!["Alice"]])]);
/// ```
pub fn build_workbook(sheets: &[(&str, Vec<Vec<&str>>)]) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    let mut zip = ZipWriter::new(&mut buffer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    let mut overrides = String::new();
    let mut sheet_entries = String::new();
    let mut relationships = String::new();
    for (idx, (name, _)) in sheets.iter().enumerate() {
        let n = idx + 1;
        overrides.push_str(&format!(
            r#"<Override PartName="/xl/worksheets/sheet{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
            n
        ));
        sheet_entries.push_str(&format!(
            r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
            escape(name),
            n,
            n
        ));
        relationships.push_str(&format!(
            r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
            n, n
        ));
    }

    // [Content_Types].xml
    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
  <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>
  {}
</Types>"#,
            overrides
        )
        .as_bytes(),
    )
    .unwrap();

    // _rels/.rels
    zip.start_file("_rels/.rels", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#,
    )
    .unwrap();

    // xl/workbook.xml
    zip.start_file("xl/workbook.xml", options).unwrap();
    zip.write_all(
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <sheets>{}</sheets>
</workbook>"#,
            sheet_entries
        )
        .as_bytes(),
    )
    .unwrap();

    // xl/_rels/workbook.xml.rels
    zip.start_file("xl/_rels/workbook.xml.rels", options)
        .unwrap();
    zip.write_all(
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  {}
</Relationships>"#,
            relationships
        )
        .as_bytes(),
    )
    .unwrap();

    // xl/styles.xml
    zip.start_file("xl/styles.xml", options).unwrap();
    zip.write_all(STYLES_XML.as_bytes()).unwrap();

    // xl/worksheets/sheetN.xml
    for (idx, (_, rows)) in sheets.iter().enumerate() {
        zip.start_file(format!("xl/worksheets/sheet{}.xml", idx + 1), options)
            .unwrap();
        zip.write_all(sheet_xml(rows).as_bytes()).unwrap();
    }

    zip.finish().unwrap();
    buffer.into_inner()
}

#[test]
fn test_column_name() {
    assert_eq!(column_name(0), "A");
    assert_eq!(column_name(25), "Z");
    assert_eq!(column_name(26), "AA");
    assert_eq!(column_name(27), "AB");
}
