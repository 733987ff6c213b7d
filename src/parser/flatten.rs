//! Flattening of the page → zone → block → line tree.

use crate::model::{LayoutDocument, Line};

/// A line in document order, tagged with the page it came from.
#[derive(Debug, Clone, Copy)]
pub struct FlatLine<'a> {
    /// Page number (1-indexed)
    pub page: u32,

    /// The line itself
    pub line: &'a Line,
}

/// Collect every line of the document in page, zone, block, line order.
///
/// Empty or absent arrays at any level contribute no lines.
pub fn flatten(doc: &LayoutDocument) -> Vec<FlatLine<'_>> {
    doc.pages
        .iter()
        .enumerate()
        .flat_map(|(index, page)| {
            let number = page.number(index);
            page.zones
                .iter()
                .flat_map(|zone| &zone.blocks)
                .flat_map(|block| &block.lines)
                .map(move |line| FlatLine { page: number, line })
        })
        .collect()
}
