//! Domain types for representing source files and their extracted content.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A user-supplied document: its declared name and raw bytes.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Declared filename, used only to derive the extension.
    pub name: String,

    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl SourceFile {
    /// Create a new source file from a name and its bytes.
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a source file from disk, named after the path's final component.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self { name, bytes })
    }

    /// Size of the file in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Lowercase suffix after the final '.', if any.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
            .map(str::to_lowercase)
    }
}

/// The format of a source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// Portable Document Format.
    Pdf,
    /// PowerPoint presentation (Office Open XML).
    Pptx,
    /// Word document (Office Open XML).
    Docx,
    /// Excel workbook (Office Open XML).
    Xlsx,
}

impl DocumentFormat {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "pptx" => Some(Self::Pptx),
            "docx" => Some(Self::Docx),
            "xlsx" => Some(Self::Xlsx),
            _ => None,
        }
    }

    /// The canonical lowercase extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Pptx => "pptx",
            Self::Docx => "docx",
            Self::Xlsx => "xlsx",
        }
    }

    /// Whether this format is stored in a ZIP package.
    pub fn is_zip_package(&self) -> bool {
        !matches!(self, Self::Pdf)
    }

    /// Check whether the leading bytes look like this format's container.
    ///
    /// The three Office formats share the ZIP signature, so this only
    /// distinguishes PDF from ZIP packages.
    pub fn matches_magic(&self, bytes: &[u8]) -> bool {
        if self.is_zip_package() {
            // PK\x03\x04
            bytes.starts_with(&[0x50, 0x4B, 0x03, 0x04])
        } else {
            bytes.starts_with(b"%PDF-")
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// The role a part plays within its document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "lowercase")]
pub enum PartKind {
    /// A PDF page (1-based).
    Page(u32),
    /// A presentation slide (1-based position in extraction order).
    Slide(usize),
    /// A speaker notes slide (1-based position in extraction order).
    Notes(usize),
    /// The main body of a word processing document.
    Body,
    /// A named worksheet.
    Sheet(String),
}

/// One ordered part of an extracted document.
///
/// Fragments are kept in the order they were encountered in the container:
/// text items for a page, paragraph lines for slides and bodies, CSV rows
/// for sheets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPart {
    /// What kind of part this is.
    pub kind: PartKind,

    /// Text fragments in document order.
    pub fragments: Vec<String>,
}

impl DocumentPart {
    /// Create an empty part of the given kind.
    pub fn new(kind: PartKind) -> Self {
        Self {
            kind,
            fragments: Vec::new(),
        }
    }

    /// Create a part with the given fragments.
    pub fn with_fragments(kind: PartKind, fragments: Vec<String>) -> Self {
        Self { kind, fragments }
    }

    /// Append a fragment.
    pub fn push(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }
}

/// The ordered result of extracting one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Format the document was extracted as.
    pub format: DocumentFormat,

    /// Parts in document order.
    pub parts: Vec<DocumentPart>,
}

impl ExtractedDocument {
    /// Create an empty document of the given format.
    pub fn new(format: DocumentFormat) -> Self {
        Self {
            format,
            parts: Vec::new(),
        }
    }

    /// Add a part to the document.
    pub fn add_part(&mut self, part: DocumentPart) {
        self.parts.push(part);
    }

    /// Count parts matching a predicate on their kind.
    pub fn count_parts(&self, pred: impl Fn(&PartKind) -> bool) -> usize {
        self.parts.iter().filter(|p| pred(&p.kind)).count()
    }
}
