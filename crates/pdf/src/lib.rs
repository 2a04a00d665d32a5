//! PDF backend for document text extraction.
//!
//! Reads the page tree in ascending page order and keeps each page's text
//! items in content-stream order. That order follows how the page was drawn,
//! which is not always reading order.

pub mod extractor;

pub use extractor::PdfExtractor;
