//! # parahtml
//!
//! Paragraph segmentation of structured PDF layout descriptions.
//!
//! The input is the JSON produced by a layout extractor: an array of pages,
//! each holding zones, blocks, lines and finally text spans with font, size
//! and position metadata. This library walks the lines in document order,
//! decides where paragraphs begin and end, and renders the result as HTML.
//!
//! ## Quick Start
//!
//! ```no_run
//! use parahtml::{parse_file, render};
//!
//! fn main() -> parahtml::Result<()> {
//!     let doc = parse_file("document_structure.json")?;
//!
//!     let paragraphs = parahtml::paragraph::segment_document(&doc);
//!     let html = render::to_html(&paragraphs, &render::RenderOptions::default())?;
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Paragraph rules
//!
//! See the [`paragraph`] module for the boundary rules.

pub mod error;
pub mod model;
pub mod paragraph;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Block, BoundingBox, LayoutDocument, Line, Page, Paragraph, Rect, Span, Zone};
pub use paragraph::{segment_document, ParagraphBuilder, StyleKey};
pub use parser::{LayoutParser, PageSelection, ParseOptions};
pub use render::{ExtractionStats, JsonFormat, RenderOptions, RenderResult};

use std::io::Read;
use std::path::Path;

/// Parse a layout JSON file.
///
/// # Example
///
/// ```no_run
/// use parahtml::parse_file;
///
/// let doc = parse_file("document_structure.json").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<LayoutDocument> {
    LayoutParser::open(path)?.parse()
}

/// Parse a layout JSON file with custom options.
///
/// # Example
///
/// ```no_run
/// use parahtml::{parse_file_with_options, PageSelection, ParseOptions};
///
/// let options = ParseOptions::new().with_pages(PageSelection::Range(1..=3));
/// let doc = parse_file_with_options("document_structure.json", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<LayoutDocument> {
    LayoutParser::open_with_options(path, options)?.parse()
}

/// Parse a layout from a JSON string.
pub fn parse_str(json: &str) -> Result<LayoutDocument> {
    LayoutParser::from_json(json)?.parse()
}

/// Parse a layout from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<LayoutDocument> {
    LayoutParser::from_bytes(data)?.parse()
}

/// Parse a layout from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<LayoutDocument> {
    LayoutParser::from_reader(reader)?.parse()
}

/// Segment a document and render its paragraphs as `<p>` elements.
///
/// Text passes through unescaped.
///
/// # Example
///
/// ```
/// let doc = parahtml::parse_str(
///     r#"[{"zones": [{"blocks": [{"lines": [{"spans": [{"text": "Hi", "font": "F", "size": 10}]}]}]}]}]"#,
/// ).unwrap();
/// assert_eq!(parahtml::generate_paragraphs(&doc), "<p>Hi</p>");
/// ```
pub fn generate_paragraphs(doc: &LayoutDocument) -> String {
    render::paragraph_elements(&segment_document(doc), &RenderOptions::default())
}

/// Convert a layout JSON file to `<p>` fragments.
///
/// # Example
///
/// ```no_run
/// let html = parahtml::to_html("document_structure.json").unwrap();
/// std::fs::write("fragment.html", html).unwrap();
/// ```
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    Parahtml::new().parse(path)?.to_html()
}

/// Convert a layout JSON file to a standalone HTML document.
pub fn to_html_document<P: AsRef<Path>>(path: P) -> Result<String> {
    Parahtml::new().parse(path)?.to_html_document()
}

/// Builder for parsing and converting layout descriptions.
///
/// # Example
///
/// ```no_run
/// use parahtml::Parahtml;
///
/// let html = Parahtml::new()
///     .with_escape(true)
///     .with_title("Annual report")
///     .parse("document_structure.json")?
///     .to_html_document()?;
/// # Ok::<(), parahtml::Error>(())
/// ```
pub struct Parahtml {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Parahtml {
    /// Create a new Parahtml builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.parse_options = self.parse_options.with_pages(pages);
        self
    }

    /// Escape paragraph text in HTML output.
    pub fn with_escape(mut self, escape: bool) -> Self {
        self.render_options = self.render_options.with_escape(escape);
        self
    }

    /// Set the title of the standalone HTML document.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_title(title);
        self
    }

    /// Set the language of the standalone HTML document.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_lang(lang);
        self
    }

    /// Set all render options at once.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Parse a layout JSON file and segment it.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<ParahtmlResult> {
        let document = LayoutParser::open_with_options(path, self.parse_options)?.parse()?;
        Ok(ParahtmlResult::new(document, self.render_options))
    }

    /// Parse a layout from a JSON string and segment it.
    pub fn parse_str(self, json: &str) -> Result<ParahtmlResult> {
        let document = LayoutParser::from_json_with_options(json, self.parse_options)?.parse()?;
        Ok(ParahtmlResult::new(document, self.render_options))
    }

    /// Parse a layout from a reader and segment it.
    pub fn parse_reader<R: Read>(self, reader: R) -> Result<ParahtmlResult> {
        let document =
            LayoutParser::from_reader_with_options(reader, self.parse_options)?.parse()?;
        Ok(ParahtmlResult::new(document, self.render_options))
    }
}

impl Default for Parahtml {
    fn default() -> Self {
        Self::new()
    }
}

/// A parsed and segmented layout description.
pub struct ParahtmlResult {
    /// The parsed document
    pub document: LayoutDocument,
    result: RenderResult,
    render_options: RenderOptions,
}

impl ParahtmlResult {
    fn new(document: LayoutDocument, render_options: RenderOptions) -> Self {
        let paragraphs = segment_document(&document);
        let result = RenderResult::from_document(&document, paragraphs);
        Self {
            document,
            result,
            render_options,
        }
    }

    /// Paragraphs in document order.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.result.paragraphs
    }

    /// Extraction statistics.
    pub fn stats(&self) -> &ExtractionStats {
        &self.result.stats
    }

    /// Render as `<p>` fragments.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(self.paragraphs(), &self.render_options)
    }

    /// Render as a standalone HTML document.
    pub fn to_html_document(&self) -> Result<String> {
        render::to_html_document(self.paragraphs(), &self.render_options)
    }

    /// Render as plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(self.paragraphs())
    }

    /// Render paragraphs and statistics as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.result, format)
    }

    /// Get the document.
    pub fn document(&self) -> &LayoutDocument {
        &self.document
    }
}
