//! Plain text rendering of paragraphs.

use crate::error::Result;
use crate::model::Paragraph;

/// Render paragraphs as plain text separated by blank lines.
pub fn to_text(paragraphs: &[Paragraph]) -> Result<String> {
    Ok(paragraphs
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n"))
}
