//! Output paragraph type.

use serde::{Deserialize, Serialize};

/// A paragraph produced by segmentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Accumulated text; tabs and same-row joins appear as `|`
    pub text: String,

    /// Number of lines absorbed into the paragraph
    pub line_count: u32,

    /// Page on which the paragraph starts
    pub page: u32,
}

impl Paragraph {
    /// Create a paragraph from text alone.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            line_count: 1,
            page: 1,
        }
    }

    /// Check if the paragraph is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
