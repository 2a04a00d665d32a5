//! Error types for document text extraction.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during document text extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// The file extension is missing or not one of the accepted formats.
    #[error("Unsupported file type '{0}'. Please upload a PDF, PPTX, DOCX, or XLSX file.")]
    UnsupportedFormat(String),

    /// The bytes cannot be opened or parsed as the format implied by the extension.
    #[error("Invalid or corrupted document: {0}")]
    CorruptDocument(String),

    /// A required internal part is absent from an otherwise valid container.
    #[error("Could not find document content: {0}")]
    MissingContent(String),

    /// Parsing succeeded but produced no usable text.
    #[error("No text could be extracted from the document")]
    EmptyExtraction,

    /// Failed to read the input file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The background extraction task did not complete.
    #[error("Extraction task failed: {0}")]
    TaskFailed(String),
}

impl Error {
    /// Shorthand for a [`Error::CorruptDocument`] with a formatted message.
    pub fn corrupt(context: &str, err: impl std::fmt::Display) -> Self {
        Error::CorruptDocument(format!("{}: {}", context, err))
    }
}
