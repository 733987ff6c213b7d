//! Document-level types.

use super::{BoundingBox, Line};
use serde::{Deserialize, Serialize};

/// A layout description: the ordered pages of one source document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutDocument {
    /// Pages in the document
    pub pages: Vec<Page>,
}

impl LayoutDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Count every line in the tree, including lines without spans.
    pub fn line_count(&self) -> usize {
        self.pages.iter().map(Page::line_count).sum()
    }

    /// Check if the document has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// A single page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed) as recorded by the extractor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Page width in points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// Page height in points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Zones in reading order
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub zones: Vec<Zone>,
}

impl Page {
    /// Create an empty page with the given number.
    pub fn new(number: u32) -> Self {
        Self {
            page: Some(number),
            ..Default::default()
        }
    }

    /// Add a zone to the page.
    pub fn add_zone(&mut self, zone: Zone) {
        self.zones.push(zone);
    }

    /// Page number, falling back to the 1-based position in the document.
    pub fn number(&self, index: usize) -> u32 {
        self.page.unwrap_or(index as u32 + 1)
    }

    /// Count every line on the page.
    pub fn line_count(&self) -> usize {
        self.zones
            .iter()
            .flat_map(|z| &z.blocks)
            .map(|b| b.lines.len())
            .sum()
    }
}

/// A rectangular region of a page (a column or a heading band).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Zone {
    /// Zone number assigned by the extractor (0 = outside every detected zone)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_number: Option<u32>,

    /// Zone rectangle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rect: Option<Rect>,

    /// Blocks in the zone
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub blocks: Vec<Block>,
}

impl Zone {
    /// Create an empty zone.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a block to the zone.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }
}

/// Zone rectangle in page coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

/// A text block: consecutive lines grouped by the extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Block {
    /// Block bounding box
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_bbox: Option<BoundingBox>,

    /// Block number within the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u32>,

    /// Lines in the block
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub lines: Vec<Line>,
}

impl Block {
    /// Create a block from lines.
    pub fn new(lines: Vec<Line>) -> Self {
        Self {
            lines,
            ..Default::default()
        }
    }

    /// Add a line to the block.
    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }
}
