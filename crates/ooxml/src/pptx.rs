//! PPTX text extraction.

use crate::package::{find_parts, open_package, read_part};
use crate::walker::{paragraphs, Vocabulary};
use doctext_core::{
    DocumentFormat, DocumentPart, Error, ExtractOptions, ExtractedDocument, Extractor, PartKind,
    Result,
};
use rayon::prelude::*;
use std::io::{Cursor, Read, Seek};
use zip::ZipArchive;

/// Name prefix of slide parts.
const SLIDE_PREFIX: &str = "ppt/slides/slide";

/// Name prefix of speaker notes parts.
const NOTES_PREFIX: &str = "ppt/notesSlides/notesSlide";

/// Extractor for PPTX (Office Open XML) presentations.
///
/// Produces one [`PartKind::Slide`] per slide part followed by one
/// [`PartKind::Notes`] per notes part, each holding its paragraph lines.
#[derive(Debug, Clone, Default)]
pub struct PptxExtractor {
    options: ExtractOptions,
}

impl PptxExtractor {
    /// Create a new PPTX extractor with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a PPTX extractor with the given options.
    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Extract a presentation from a reader.
    pub fn extract_from<R: Read + Seek>(&self, reader: R) -> Result<ExtractedDocument> {
        let mut archive = open_package(reader)?;
        let mut document = ExtractedDocument::new(DocumentFormat::Pptx);

        let slide_names = find_parts(&mut archive, SLIDE_PREFIX, self.options.slide_order)?;
        let slides = parse_parts(&mut archive, &slide_names)?;
        for (idx, lines) in slides.into_iter().enumerate() {
            document.add_part(DocumentPart::with_fragments(PartKind::Slide(idx + 1), lines));
        }

        if self.options.include_notes {
            let notes_names = find_parts(&mut archive, NOTES_PREFIX, self.options.slide_order)?;
            let notes = parse_parts(&mut archive, &notes_names)?;
            for (idx, lines) in notes.into_iter().enumerate() {
                document.add_part(DocumentPart::with_fragments(PartKind::Notes(idx + 1), lines));
            }
        }

        log::debug!(
            "PPTX: {} slide parts, {} notes parts",
            document.count_parts(|k| matches!(k, PartKind::Slide(_))),
            document.count_parts(|k| matches!(k, PartKind::Notes(_))),
        );

        Ok(document)
    }
}

impl Extractor for PptxExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pptx
    }

    fn extract(&self, bytes: &[u8]) -> Result<ExtractedDocument> {
        self.extract_from(Cursor::new(bytes))
    }
}

/// Read the named parts, then parse them in parallel.
///
/// Results come back in the order of `names`.
fn parse_parts<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    names: &[String],
) -> Result<Vec<Vec<String>>> {
    // The archive reader is not shareable, so reads stay sequential.
    let mut contents = Vec::with_capacity(names.len());
    for name in names {
        let xml = read_part(archive, name)?
            .ok_or_else(|| Error::CorruptDocument(format!("Part '{}' disappeared", name)))?;
        contents.push((name, xml));
    }

    contents
        .par_iter()
        .map(|(name, xml)| {
            paragraphs(xml, Vocabulary::DRAWINGML)
                .map_err(|e| Error::corrupt(&format!("Failed to parse '{}'", name), e))
        })
        .collect()
}
