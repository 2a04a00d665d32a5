//! PDF extractor implementation.

use doctext_core::{
    DocumentFormat, DocumentPart, Error, ExtractedDocument, Extractor, PartKind, Result,
};
use lopdf::{Document, Object, ObjectId};
use std::collections::BTreeMap;

/// Extractor for PDF documents.
///
/// Produces one [`PartKind::Page`] per page, whose fragments are the page's
/// text items: one per show-text operation, in content-stream order. Pages
/// without text yield a part with no fragments.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for PdfExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn extract(&self, bytes: &[u8]) -> Result<ExtractedDocument> {
        let pdf = Document::load_mem(bytes).map_err(|e| Error::corrupt("Failed to open PDF", e))?;
        let mut document = ExtractedDocument::new(DocumentFormat::Pdf);

        // BTreeMap keyed by page number, so iteration is ascending.
        for (page_num, page_id) in pdf.get_pages() {
            let part = read_page(&pdf, page_num, page_id)
                .map_err(|e| Error::corrupt(&format!("Failed to read text of page {}", page_num), e))?;
            document.add_part(part);
        }

        log::debug!("PDF: {} pages", document.parts.len());
        Ok(document)
    }
}

/// Collect a page's text items from its decoded content stream.
fn read_page(pdf: &Document, page_num: u32, page_id: ObjectId) -> lopdf::Result<DocumentPart> {
    let encodings: BTreeMap<Vec<u8>, &str> = pdf
        .get_page_fonts(page_id)
        .into_iter()
        .map(|(name, font)| (name, font.get_font_encoding()))
        .collect();
    let content = pdf.get_and_decode_page_content(page_id)?;

    let mut part = DocumentPart::new(PartKind::Page(page_num));
    let mut encoding = None;

    for op in &content.operations {
        let shown: &[Object] = match op.operator.as_str() {
            "Tf" => {
                encoding = match op.operands.first() {
                    Some(font) => encodings.get(font.as_name()?).copied(),
                    None => None,
                };
                continue;
            }
            "Tj" | "TJ" | "'" => &op.operands,
            // aw ac string
            "\"" => op.operands.get(2..).unwrap_or_default(),
            _ => continue,
        };

        let mut item = String::new();
        show_text(&mut item, encoding, shown);
        let item = item.trim();
        if !item.is_empty() {
            part.push(item);
        }
    }

    Ok(part)
}

/// Decode the strings of one show-text operation into `out`.
fn show_text(out: &mut String, encoding: Option<&str>, operands: &[Object]) {
    for operand in operands {
        match operand {
            Object::String(bytes, _) => out.push_str(&Document::decode_text(encoding, bytes)),
            Object::Array(items) => show_text(out, encoding, items),
            // A wide negative adjustment inside TJ stands for a word gap.
            Object::Integer(adjust) if *adjust < -100 => out.push(' '),
            Object::Real(adjust) if *adjust < -100.0 => out.push(' '),
            _ => {}
        }
    }
}
