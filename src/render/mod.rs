//! Rendering module for converting paragraphs to output formats.

mod html;
mod json;
mod options;
mod result;
mod text;

pub use html::{to_html, to_html_document};
pub(crate) use html::paragraph_elements;
pub use json::{to_json, JsonFormat};
pub use options::{RenderOptions, DEFAULT_LANG, DEFAULT_TITLE};
pub use result::{ExtractionStats, RenderResult};
pub use text::to_text;
