//! Core domain types, error taxonomy, and text assembly
//! for document text extraction.

pub mod assemble;
pub mod error;
pub mod options;
pub mod types;

pub use assemble::{assemble, NOTES_MARKER};
pub use error::{Error, Result};
pub use options::{ExtractOptions, SlideOrder};
pub use types::{DocumentFormat, DocumentPart, ExtractedDocument, PartKind, SourceFile};

/// A format-specific routine mapping document bytes to ordered text parts.
pub trait Extractor: Send + Sync {
    /// The format this extractor handles.
    fn format(&self) -> DocumentFormat;

    /// Extract the ordered parts of a document from its raw bytes.
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedDocument>;
}
