//! Format dispatch and extraction entry points.

use doctext_core::{
    assemble, DocumentFormat, Error, ExtractOptions, ExtractedDocument, Extractor, Result,
    SourceFile,
};
use doctext_ooxml::{DocxExtractor, PptxExtractor};
use doctext_pdf::PdfExtractor;
use doctext_xlsx::XlsxExtractor;

/// Accepted file extensions.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "pptx", "docx", "xlsx"];

/// Determine a file's format from its extension.
///
/// Fails with [`Error::UnsupportedFormat`] when the extension is missing or
/// not one of [`SUPPORTED_EXTENSIONS`]. The file's bytes are not inspected.
pub fn detect_format(file: &SourceFile) -> Result<DocumentFormat> {
    let ext = file.extension().unwrap_or_default();
    DocumentFormat::from_extension(&ext).ok_or(Error::UnsupportedFormat(ext))
}

/// The extractor responsible for a format.
pub fn extractor_for(format: DocumentFormat, options: &ExtractOptions) -> Box<dyn Extractor> {
    match format {
        DocumentFormat::Pdf => Box::new(PdfExtractor::new()),
        DocumentFormat::Pptx => Box::new(PptxExtractor::with_options(options.clone())),
        DocumentFormat::Docx => Box::new(DocxExtractor::new()),
        DocumentFormat::Xlsx => Box::new(XlsxExtractor::new()),
    }
}

/// Extract the ordered parts of a file.
pub fn extract_document(file: &SourceFile, options: &ExtractOptions) -> Result<ExtractedDocument> {
    let format = detect_format(file)?;

    if !format.matches_magic(&file.bytes) {
        log::warn!(
            "'{}' does not look like a {} file; parsing it anyway",
            file.name,
            format
        );
    }
    log::debug!(
        "Extracting '{}' as {} ({} bytes)",
        file.name,
        format,
        file.size()
    );

    extractor_for(format, options).extract(&file.bytes)
}

/// Extract a file's text as one trimmed string.
pub fn extract_text(file: &SourceFile, options: &ExtractOptions) -> Result<String> {
    let document = extract_document(file, options)?;
    Ok(assemble(&document))
}

/// Extract a file's text with default options.
///
/// Parsing runs on the blocking thread pool; the returned future completes
/// when extraction finishes or fails.
pub async fn extract_text_from_file(file: SourceFile) -> Result<String> {
    extract_text_from_file_with(file, ExtractOptions::default()).await
}

/// Extract a file's text with the given options.
pub async fn extract_text_from_file_with(file: SourceFile, options: ExtractOptions) -> Result<String> {
    // Reject unsupported names before handing anything to the pool.
    detect_format(&file)?;

    tokio::task::spawn_blocking(move || extract_text(&file, &options))
        .await
        .map_err(|e| Error::TaskFailed(e.to_string()))?
}

/// Extract a file's ordered parts on the blocking thread pool.
pub async fn extract_document_from_file(
    file: SourceFile,
    options: ExtractOptions,
) -> Result<ExtractedDocument> {
    detect_format(&file)?;

    tokio::task::spawn_blocking(move || extract_document(&file, &options))
        .await
        .map_err(|e| Error::TaskFailed(e.to_string()))?
}

/// Reject text with no visible content.
///
/// Extractors return an empty string for documents without text; callers
/// that need prompt material use this to turn that into
/// [`Error::EmptyExtraction`].
pub fn require_text(text: String) -> Result<String> {
    if text.trim().is_empty() {
        Err(Error::EmptyExtraction)
    } else {
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::FileOptions;
    use zip::ZipWriter;

    const A_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
    const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

    fn zip_of(entries: &[(&str, String)]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in entries {
            writer.start_file(*name, FileOptions::default()).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
            .collect();
        let xml = format!(r#"<w:document xmlns:w="{W_NS}"><w:body>{body}</w:body></w:document>"#);
        zip_of(&[("word/document.xml", xml)])
    }

    fn slide(text: &str) -> String {
        format!(r#"<p:sld xmlns:a="{A_NS}" xmlns:p="p"><a:p><a:r><a:t>{text}</a:t></a:r></a:p></p:sld>"#)
    }

    #[test]
    fn test_unsupported_extension_is_rejected_before_parsing() {
        let file = SourceFile::new("notes.txt", b"Plain notes".to_vec());
        match extract_text(&file, &ExtractOptions::default()) {
            Err(Error::UnsupportedFormat(ext)) => assert_eq!(ext, "txt"),
            other => panic!("Expected UnsupportedFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_extension_is_unsupported() {
        let file = SourceFile::new("README", Vec::new());
        assert!(matches!(
            detect_format(&file),
            Err(Error::UnsupportedFormat(ext)) if ext.is_empty()
        ));
    }

    #[test]
    fn test_detect_format_is_case_insensitive() {
        for (name, expected) in [
            ("a.PDF", DocumentFormat::Pdf),
            ("b.Pptx", DocumentFormat::Pptx),
            ("c.docx", DocumentFormat::Docx),
            ("d.XLSX", DocumentFormat::Xlsx),
        ] {
            let file = SourceFile::new(name, Vec::new());
            assert_eq!(detect_format(&file).unwrap(), expected);
        }
    }

    #[test]
    fn test_extractor_for_matches_format() {
        let options = ExtractOptions::default();
        for ext in SUPPORTED_EXTENSIONS {
            let format = DocumentFormat::from_extension(ext).unwrap();
            assert_eq!(extractor_for(format, &options).format(), format);
        }
    }

    #[test]
    fn test_docx_routes_to_docx_extractor() {
        let file = SourceFile::new("Essay.DOCX", docx_bytes(&["First", "Second"]));
        let text = extract_text(&file, &ExtractOptions::default()).unwrap();
        assert_eq!(text, "First\nSecond");
    }

    #[test]
    fn test_docx_without_document_part() {
        let file = SourceFile::new("empty.docx", zip_of(&[("word/styles.xml", "<x/>".into())]));
        assert!(matches!(
            extract_text(&file, &ExtractOptions::default()),
            Err(Error::MissingContent(_))
        ));
    }

    #[test]
    fn test_pptx_options_are_forwarded() {
        let bytes = zip_of(&[
            ("ppt/slides/slide1.xml", slide("Slide")),
            ("ppt/notesSlides/notesSlide1.xml", slide("Note1")),
        ]);
        let file = SourceFile::new("deck.pptx", bytes);

        let with_notes = extract_text(&file, &ExtractOptions::default()).unwrap();
        assert_eq!(with_notes, "Slide\n\n--- SLIDE NOTES ---\nNote1");

        let without = extract_text(&file, &ExtractOptions::new().with_notes(false)).unwrap();
        assert_eq!(without, "Slide");
    }

    #[test]
    fn test_wrong_content_for_extension_is_corrupt() {
        let file = SourceFile::new("fake.pdf", docx_bytes(&["hi"]));
        assert!(matches!(
            extract_text(&file, &ExtractOptions::default()),
            Err(Error::CorruptDocument(_))
        ));
    }

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("ok".to_string()).unwrap(), "ok");
        assert!(matches!(require_text(String::new()), Err(Error::EmptyExtraction)));
        assert!(matches!(require_text(" \n ".to_string()), Err(Error::EmptyExtraction)));
    }

    #[test]
    fn test_empty_document_needs_caller_check() {
        let file = SourceFile::new("blank.docx", docx_bytes(&[]));
        let text = extract_text(&file, &ExtractOptions::default()).unwrap();
        assert_eq!(text, "");
        assert!(matches!(require_text(text), Err(Error::EmptyExtraction)));
    }

    #[tokio::test]
    async fn test_async_matches_sync() {
        let file = SourceFile::new("doc.docx", docx_bytes(&["Alpha", "Beta"]));
        let sync_text = extract_text(&file, &ExtractOptions::default()).unwrap();
        let async_text = extract_text_from_file(file).await.unwrap();
        assert_eq!(async_text, sync_text);
    }

    #[tokio::test]
    async fn test_async_rejects_unsupported() {
        let file = SourceFile::new("notes.txt", Vec::new());
        let result = extract_text_from_file(file).await;
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[tokio::test]
    async fn test_async_document_keeps_parts() {
        let bytes = zip_of(&[
            ("ppt/slides/slide2.xml", slide("two")),
            ("ppt/slides/slide1.xml", slide("one")),
        ]);
        let file = SourceFile::new("deck.pptx", bytes);
        let doc = extract_document_from_file(file, ExtractOptions::default())
            .await
            .unwrap();
        assert_eq!(doc.format, DocumentFormat::Pptx);
        assert_eq!(doc.parts.len(), 2);
        assert_eq!(doc.parts[0].fragments, vec!["one"]);
    }
}
