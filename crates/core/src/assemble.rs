//! Text assembly.
//!
//! Turns the ordered parts of an [`ExtractedDocument`] into the single
//! plain-text stream handed to downstream consumers. Separators depend on the
//! part kind. Every format goes through the same finishing step: leading
//! whitespace and trailing blank space are removed, and output made of
//! newline-terminated records (pages, sheet rows) keeps its final newline.

use crate::types::{DocumentPart, ExtractedDocument, PartKind};

/// Marker line written before the speaker notes section of a presentation.
pub const NOTES_MARKER: &str = "--- SLIDE NOTES ---";

/// Render a document's parts into one string.
pub fn assemble(doc: &ExtractedDocument) -> String {
    let mut out = String::with_capacity(estimate_len(doc));
    let mut notes_started = false;

    for part in &doc.parts {
        match &part.kind {
            PartKind::Page(_) => {
                out.push_str(&part.fragments.join(" "));
                out.push('\n');
            }
            PartKind::Slide(_) => {
                let block = paragraph_block(part);
                if !block.is_empty() {
                    out.push_str(&block);
                    out.push_str("\n\n");
                }
            }
            PartKind::Notes(_) => {
                // The marker opens the section once any notes part exists.
                if !notes_started {
                    out.push_str(NOTES_MARKER);
                    out.push('\n');
                    notes_started = true;
                }
                let block = paragraph_block(part);
                if !block.is_empty() {
                    out.push_str(&block);
                    out.push_str("\n\n");
                }
            }
            PartKind::Body => {
                for line in part.fragments.iter().filter(|l| !l.trim().is_empty()) {
                    out.push_str(line);
                    out.push('\n');
                }
            }
            PartKind::Sheet(_) => out.push_str(&sheet_block(part)),
        }
    }

    finish(&out, ends_with_record(doc))
}

/// Whether the last part renders as newline-terminated records.
fn ends_with_record(doc: &ExtractedDocument) -> bool {
    matches!(
        doc.parts.last().map(|p| &p.kind),
        Some(PartKind::Page(_) | PartKind::Sheet(_))
    )
}

/// Strip surrounding whitespace, restoring the record terminator if needed.
fn finish(text: &str, terminated: bool) -> String {
    let body = text.trim();
    if body.is_empty() {
        String::new()
    } else if terminated {
        format!("{}\n", body)
    } else {
        body.to_string()
    }
}

/// Join a part's non-blank paragraph lines with newlines and trim the block.
pub fn paragraph_block(part: &DocumentPart) -> String {
    part.fragments
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// A sheet's CSV rows joined by newlines, with a trailing newline.
pub fn sheet_block(part: &DocumentPart) -> String {
    let mut block = part.fragments.join("\n");
    block.push('\n');
    block
}

fn estimate_len(doc: &ExtractedDocument) -> usize {
    doc.parts
        .iter()
        .flat_map(|p| p.fragments.iter())
        .map(|f| f.len() + 1)
        .sum()
}
