//! DOCX text extraction.

use crate::package::{open_package, read_part};
use crate::walker::{paragraphs, Vocabulary};
use doctext_core::{
    DocumentFormat, DocumentPart, Error, ExtractedDocument, Extractor, PartKind, Result,
};
use std::io::{Cursor, Read, Seek};

/// Fixed path of the main document part.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Extractor for DOCX (Office Open XML) documents.
///
/// Only the main document part is read; headers, footers and comments live
/// in other parts and are not included.
#[derive(Debug, Clone, Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    /// Create a new DOCX extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract a document from a reader.
    pub fn extract_from<R: Read + Seek>(&self, reader: R) -> Result<ExtractedDocument> {
        let mut archive = open_package(reader)?;

        let xml = read_part(&mut archive, DOCUMENT_PART)?
            .ok_or_else(|| Error::MissingContent(DOCUMENT_PART.to_string()))?;

        let lines = paragraphs(&xml, Vocabulary::WORDPROCESSINGML)
            .map_err(|e| Error::corrupt(&format!("Failed to parse '{}'", DOCUMENT_PART), e))?;
        log::debug!("DOCX: {} paragraphs", lines.len());

        let mut document = ExtractedDocument::new(DocumentFormat::Docx);
        document.add_part(DocumentPart::with_fragments(PartKind::Body, lines));
        Ok(document)
    }
}

impl Extractor for DocxExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    fn extract(&self, bytes: &[u8]) -> Result<ExtractedDocument> {
        self.extract_from(Cursor::new(bytes))
    }
}
