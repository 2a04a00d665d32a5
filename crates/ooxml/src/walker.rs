//! Paragraph/run walker shared by the PPTX and DOCX backends.
//!
//! Office Open XML stores visible text in text-run elements nested inside
//! paragraph elements. The walker does one depth-first pass over a part and
//! returns one line per paragraph, built by concatenating its runs in
//! document order with no separator.

use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

/// DrawingML namespace (slides, notes, shapes).
pub const DRAWINGML_NS: &[u8] = b"http://schemas.openxmlformats.org/drawingml/2006/main";

/// WordprocessingML namespace (Word documents).
pub const WORDPROCESSINGML_NS: &[u8] =
    b"http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Paragraph and text-run element names of one markup vocabulary.
///
/// Elements are matched by namespace URI and local name, so documents that
/// bind the namespace to an unusual prefix are still recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary {
    /// Namespace URI both elements live in.
    pub namespace: &'static [u8],
    /// Local name of the paragraph element.
    pub paragraph: &'static [u8],
    /// Local name of the text-run content element.
    pub text: &'static [u8],
}

impl Vocabulary {
    /// `a:p` / `a:t`, used by slides and notes slides.
    pub const DRAWINGML: Self = Self {
        namespace: DRAWINGML_NS,
        paragraph: b"p",
        text: b"t",
    };

    /// `w:p` / `w:t`, used by the main Word document part.
    pub const WORDPROCESSINGML: Self = Self {
        namespace: WORDPROCESSINGML_NS,
        paragraph: b"p",
        text: b"t",
    };

    fn is_paragraph(&self, ns: &ResolveResult, local: &[u8]) -> bool {
        self.in_namespace(ns) && local == self.paragraph
    }

    fn is_text(&self, ns: &ResolveResult, local: &[u8]) -> bool {
        self.in_namespace(ns) && local == self.text
    }

    fn in_namespace(&self, ns: &ResolveResult) -> bool {
        matches!(ns, ResolveResult::Bound(Namespace(uri)) if *uri == self.namespace)
    }
}

/// Collect one line per paragraph from an XML part.
///
/// Lines are returned in the order their paragraphs open. Run text belongs to
/// the innermost open paragraph, so a paragraph nested inside another (a Word
/// text box, for instance) becomes its own line instead of being merged into
/// its parent. Empty lines are kept; callers decide what to drop.
pub fn paragraphs(xml: &str, vocab: Vocabulary) -> Result<Vec<String>, quick_xml::Error> {
    let mut reader = NsReader::from_str(xml);

    let mut lines: Vec<String> = Vec::new();
    // Indices into `lines` of the paragraphs currently open.
    let mut open: Vec<usize> = Vec::new();
    let mut text_depth = 0usize;

    loop {
        match reader.read_resolved_event()? {
            (ns, Event::Start(e)) => {
                let local = e.local_name();
                if vocab.is_paragraph(&ns, local.as_ref()) {
                    open.push(lines.len());
                    lines.push(String::new());
                } else if vocab.is_text(&ns, local.as_ref()) {
                    text_depth += 1;
                }
            }
            (ns, Event::End(e)) => {
                let local = e.local_name();
                if vocab.is_paragraph(&ns, local.as_ref()) {
                    open.pop();
                } else if vocab.is_text(&ns, local.as_ref()) {
                    text_depth = text_depth.saturating_sub(1);
                }
            }
            (_, Event::Text(e)) if text_depth > 0 => {
                if let Some(&idx) = open.last() {
                    lines[idx].push_str(&e.unescape()?);
                }
            }
            (_, Event::CData(e)) if text_depth > 0 => {
                if let Some(&idx) = open.last() {
                    lines[idx].push_str(&String::from_utf8_lossy(&e));
                }
            }
            (_, Event::Eof) => break,
            _ => {}
        }
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    const A_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
    const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

    #[test]
    fn test_runs_concatenate_without_separator() {
        let xml = format!(
            r#"<p:sld xmlns:a="{A_NS}" xmlns:p="p"><a:p><a:r><a:t>Hel</a:t></a:r><a:r><a:t>lo</a:t></a:r></a:p><a:p><a:r><a:t>World</a:t></a:r></a:p></p:sld>"#
        );
        let lines = paragraphs(&xml, Vocabulary::DRAWINGML).unwrap();
        assert_eq!(lines, vec!["Hello", "World"]);
    }

    #[test]
    fn test_whitespace_inside_runs_is_preserved() {
        let xml = format!(
            r#"<w:document xmlns:w="{W_NS}"><w:body><w:p><w:r><w:t>one</w:t></w:r><w:r><w:t xml:space="preserve"> two</w:t></w:r></w:p></w:body></w:document>"#
        );
        let lines = paragraphs(&xml, Vocabulary::WORDPROCESSINGML).unwrap();
        assert_eq!(lines, vec!["one two"]);
    }

    #[test]
    fn test_entities_are_unescaped() {
        let xml = format!(r#"<root xmlns:a="{A_NS}"><a:p><a:t>Q&amp;A &lt;1&gt;</a:t></a:p></root>"#);
        let lines = paragraphs(&xml, Vocabulary::DRAWINGML).unwrap();
        assert_eq!(lines, vec!["Q&A <1>"]);
    }

    #[test]
    fn test_matches_by_namespace_not_prefix() {
        let xml = format!(r#"<root xmlns:d="{A_NS}"><d:p><d:t>custom prefix</d:t></d:p></root>"#);
        let lines = paragraphs(&xml, Vocabulary::DRAWINGML).unwrap();
        assert_eq!(lines, vec!["custom prefix"]);
    }

    #[test]
    fn test_other_vocabulary_is_ignored() {
        let xml = format!(r#"<root xmlns:w="{W_NS}"><w:p><w:t>word text</w:t></w:p></root>"#);
        let lines = paragraphs(&xml, Vocabulary::DRAWINGML).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_text_outside_runs_is_ignored() {
        let xml = format!(
            r#"<root xmlns:a="{A_NS}"><a:p>stray<a:r><a:rPr lang="en-US"/><a:t>kept</a:t></a:r></a:p></root>"#
        );
        let lines = paragraphs(&xml, Vocabulary::DRAWINGML).unwrap();
        assert_eq!(lines, vec!["kept"]);
    }

    #[test]
    fn test_nested_paragraph_gets_its_own_line() {
        let xml = format!(
            r#"<w:document xmlns:w="{W_NS}"><w:p><w:r><w:t>outer </w:t></w:r><w:r><w:txbxContent><w:p><w:r><w:t>inner</w:t></w:r></w:p></w:txbxContent></w:r><w:r><w:t>after</w:t></w:r></w:p></w:document>"#
        );
        let lines = paragraphs(&xml, Vocabulary::WORDPROCESSINGML).unwrap();
        assert_eq!(lines, vec!["outer after", "inner"]);
    }

    #[test]
    fn test_empty_paragraphs_are_kept() {
        let xml = format!(r#"<root xmlns:a="{A_NS}"><a:p></a:p><a:p><a:t>x</a:t></a:p></root>"#);
        let lines = paragraphs(&xml, Vocabulary::DRAWINGML).unwrap();
        assert_eq!(lines, vec!["", "x"]);
    }

    #[test]
    fn test_mismatched_tags_fail() {
        let xml = format!(r#"<root xmlns:a="{A_NS}"><a:p><a:t>broken</a:p></root>"#);
        assert!(paragraphs(&xml, Vocabulary::DRAWINGML).is_err());
    }
}
