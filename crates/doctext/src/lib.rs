//! Extract plain text from PDF, PPTX, DOCX, and XLSX documents.
//!
//! The entry points pick an extractor from the file extension, run it, and
//! assemble the ordered parts into one string with surrounding blank space
//! removed:
//!
//! ```rust,ignore
//! use doctext::{extract_text_from_file, SourceFile};
//!
//! let file = SourceFile::new("lecture.pptx", std::fs::read("lecture.pptx")?);
//! let text = doctext::require_text(extract_text_from_file(file).await?)?;
//! ```

pub mod dispatch;

pub use dispatch::{
    detect_format, extract_document, extract_document_from_file, extract_text,
    extract_text_from_file, extract_text_from_file_with, extractor_for, require_text,
    SUPPORTED_EXTENSIONS,
};
pub use doctext_core::{
    assemble, DocumentFormat, DocumentPart, Error, ExtractOptions, ExtractedDocument, Extractor,
    PartKind, Result, SlideOrder, SourceFile, NOTES_MARKER,
};
