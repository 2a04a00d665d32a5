//! Office Open XML backends for document text extraction.
//!
//! PPTX and DOCX files are ZIP packages of XML parts. Both formats store
//! text as runs inside paragraphs; [`walker`] linearizes those into lines
//! and the extractors decide which parts to read and in what order.

pub mod docx;
pub mod package;
pub mod pptx;
pub mod walker;

pub use docx::DocxExtractor;
pub use pptx::PptxExtractor;
pub use walker::Vocabulary;
