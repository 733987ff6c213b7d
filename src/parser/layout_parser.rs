//! Layout JSON parser.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Result;
use crate::model::LayoutDocument;

use super::options::{PageSelection, ParseOptions};

/// Reads a layout description (a JSON array of pages) into a [`LayoutDocument`].
pub struct LayoutParser {
    doc: LayoutDocument,
    options: ParseOptions,
}

impl LayoutParser {
    /// Open a layout JSON file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a layout JSON file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Reading layout from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader_with_options(BufReader::new(file), options)
    }

    /// Parse a layout from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_json_with_options(json, ParseOptions::default())
    }

    /// Parse a layout from a JSON string with custom options.
    pub fn from_json_with_options(json: &str, options: ParseOptions) -> Result<Self> {
        let doc = serde_json::from_str(json)?;
        Ok(Self { doc, options })
    }

    /// Parse a layout from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a layout from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let doc = serde_json::from_slice(data)?;
        Ok(Self { doc, options })
    }

    /// Parse a layout from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a layout from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Self> {
        let doc = serde_json::from_reader(reader)?;
        Ok(Self { doc, options })
    }

    /// Apply the options and return the document.
    ///
    /// Every kept page has its number recorded, so numbering stays stable
    /// after unselected pages are dropped.
    pub fn parse(self) -> Result<LayoutDocument> {
        let Self { doc, options } = self;
        let total = doc.pages.len();

        let mut document = LayoutDocument::new();
        for (index, mut page) in doc.pages.into_iter().enumerate() {
            let number = page.number(index);
            if !options.pages.includes(number) {
                continue;
            }
            page.page = Some(number);
            document.add_page(page);
        }

        if total > 0 && document.is_empty() && options.pages != PageSelection::All {
            log::warn!(
                "Page selection {:?} matched none of the {} pages",
                options.pages,
                total
            );
        }

        log::debug!(
            "Parsed layout: {} of {} pages, {} lines",
            document.page_count(),
            total,
            document.line_count()
        );

        Ok(document)
    }
}
