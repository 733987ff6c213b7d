//! Layout model types.
//!
//! This module defines the page → zone → block → line → span tree read from a
//! layout description, and the [`Paragraph`] values produced from it. Every
//! level of the tree is optional in the input: absent or `null` arrays are
//! read as empty, absent scalar fields as `None`.

mod document;
mod line;
mod paragraph;

pub use document::{Block, LayoutDocument, Page, Rect, Zone};
pub use line::{BoundingBox, Line, Span};
pub use paragraph::Paragraph;

use serde::{Deserialize, Deserializer};

/// Deserialize `null` the same way as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
