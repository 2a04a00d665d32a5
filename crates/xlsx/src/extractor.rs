//! XLSX extractor implementation.

use crate::csv::format_row;
use calamine::{Data, Range, Reader, Xlsx};
use doctext_core::{
    DocumentFormat, DocumentPart, Error, ExtractedDocument, Extractor, PartKind, Result,
};
use std::io::Cursor;

/// Extractor for XLSX workbooks.
///
/// Produces one [`PartKind::Sheet`] per worksheet, whose fragments are the
/// sheet's CSV rows. Only cached cell values are read; formulas, styles and
/// embedded media are ignored.
#[derive(Debug, Clone, Default)]
pub struct XlsxExtractor;

impl XlsxExtractor {
    /// Create a new XLSX extractor.
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for XlsxExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Xlsx
    }

    fn extract(&self, bytes: &[u8]) -> Result<ExtractedDocument> {
        let mut workbook: Xlsx<_> =
            Xlsx::new(Cursor::new(bytes)).map_err(|e| Error::corrupt("Failed to open workbook", e))?;

        let mut document = ExtractedDocument::new(DocumentFormat::Xlsx);

        // Declared workbook order, not alphabetical.
        for sheet_name in workbook.sheet_names() {
            let range = workbook
                .worksheet_range(&sheet_name)
                .map_err(|e| Error::corrupt(&format!("Failed to read sheet '{}'", sheet_name), e))?;

            let rows = sheet_rows(&range);
            log::debug!("XLSX: sheet '{}' has {} rows", sheet_name, rows.len());
            document.add_part(DocumentPart::with_fragments(PartKind::Sheet(sheet_name), rows));
        }

        Ok(document)
    }
}

/// Convert a sheet's populated range to CSV rows.
fn sheet_rows(range: &Range<Data>) -> Vec<String> {
    range
        .rows()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(render_cell).collect();
            format_row(&cells)
        })
        .collect()
}

/// Render a cell value the way it would read in a CSV export.
fn render_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(true) => "TRUE".to_string(),
        Data::Bool(false) => "FALSE".to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) => {
                let full = ndt.format("%Y-%m-%d %H:%M:%S").to_string();
                match full.strip_suffix(" 00:00:00") {
                    Some(date) => date.to_string(),
                    None => full,
                }
            }
            None => dt.as_f64().to_string(),
        },
        other => other.to_string(),
    }
}
