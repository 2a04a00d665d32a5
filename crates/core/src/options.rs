//! Extraction options.

use serde::{Deserialize, Serialize};

/// How slide and notes parts are ordered before assembly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlideOrder {
    /// Sort by the number in the part name (`slide2.xml` before `slide10.xml`).
    #[default]
    Numeric,
    /// Keep the order in which the archive lists its entries.
    Archive,
}

/// Options controlling extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Append speaker notes after slide content.
    pub include_notes: bool,

    /// Ordering applied to slide and notes parts.
    pub slide_order: SlideOrder,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            include_notes: true,
            slide_order: SlideOrder::Numeric,
        }
    }
}

impl ExtractOptions {
    /// Create options with the defaults (notes included, numeric slide order).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable speaker notes extraction.
    pub fn with_notes(mut self, include_notes: bool) -> Self {
        self.include_notes = include_notes;
        self
    }

    /// Set the slide ordering.
    pub fn with_slide_order(mut self, order: SlideOrder) -> Self {
        self.slide_order = order;
        self
    }
}
