//! Segmentation result with statistics.

use crate::model::{LayoutDocument, Paragraph};
use crate::parser::flatten;
use serde::{Deserialize, Serialize};

/// Paragraphs of a document together with statistics about how they were built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// Paragraphs in document order
    pub paragraphs: Vec<Paragraph>,

    /// Extraction statistics
    pub stats: ExtractionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(paragraphs: Vec<Paragraph>, stats: ExtractionStats) -> Self {
        Self { paragraphs, stats }
    }

    /// Build a result for `doc`, computing statistics from the document and its paragraphs.
    pub fn from_document(doc: &LayoutDocument, paragraphs: Vec<Paragraph>) -> Self {
        let stats = ExtractionStats::collect(doc, &paragraphs);
        Self { paragraphs, stats }
    }
}

/// Statistics collected while segmenting a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Number of pages processed
    pub page_count: u32,

    /// Number of lines in the layout, including lines without spans
    pub line_count: u32,

    /// Number of lines dropped because they had no spans
    pub skipped_line_count: u32,

    /// Number of paragraphs produced
    pub paragraph_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gather statistics for a document and the paragraphs produced from it.
    pub fn collect(doc: &LayoutDocument, paragraphs: &[Paragraph]) -> Self {
        let mut stats = Self::new();
        for _ in &doc.pages {
            stats.add_page();
        }
        for flat in flatten(doc) {
            stats.add_line(flat.line.is_empty());
        }
        for paragraph in paragraphs {
            stats.add_paragraph();
            stats.count_text(&paragraph.text);
        }
        stats
    }

    /// Increment page count.
    pub fn add_page(&mut self) {
        self.page_count += 1;
    }

    /// Increment line count, and the skipped count for a span-less line.
    pub fn add_line(&mut self, skipped: bool) {
        self.line_count += 1;
        if skipped {
            self.skipped_line_count += 1;
        }
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}
