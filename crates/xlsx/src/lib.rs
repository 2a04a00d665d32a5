//! XLSX backend for document text extraction.
//!
//! Each worksheet becomes a block of comma-separated rows, in the order the
//! workbook declares its sheets.

pub mod csv;
pub mod extractor;

pub use extractor::XlsxExtractor;
