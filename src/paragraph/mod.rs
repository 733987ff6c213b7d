//! Paragraph segmentation.
//!
//! Lines arrive in document order and a small rule-based classifier decides,
//! for each one, whether the paragraph being accumulated ends before it. The
//! rule is position and punctuation aware:
//!
//! - a line sharing the previous line's baseline, after text that ends in a
//!   space or `|`, is another run on the same visual row and is joined with
//!   `|` (table cells, side-by-side columns);
//! - otherwise the paragraph ends when its text ends in `.`, `?` or `!`, or
//!   when the style key (font + size to the nearest half point) changes
//!   between the last span of the previous line and the first span of this
//!   one;
//! - otherwise the line continues the paragraph.
//!
//! Lines without spans are ignored. Tabs inside a line become `|`.
//!
//! Ending on sentence punctuation also ends paragraphs after abbreviations
//! such as "e.g." at the end of a line; that is a known limitation of the
//! heuristic.

mod builder;
mod classifier;
mod style;

pub use builder::{segment, segment_document, ParagraphBuilder};
pub use classifier::{classify, line_text, BoundaryState, Decision, SEPARATOR};
pub use style::StyleKey;
