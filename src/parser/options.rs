//! Parsing options and configuration.

use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// Options for reading a layout description.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Page selection (which pages to keep)
    pub pages: PageSelection,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }

    /// Set specific page range.
    pub fn with_page_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.pages = PageSelection::Range(range);
        self
    }
}

/// Page selection, by 1-indexed page number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// Keep all pages
    #[default]
    All,
    /// Keep a range of pages (inclusive)
    Range(RangeInclusive<u32>),
    /// Keep specific pages
    Pages(Vec<u32>),
    /// Keep several ranges of pages (sorted, non-overlapping)
    Ranges(Vec<RangeInclusive<u32>>),
}

impl PageSelection {
    /// Check if a page number should be included.
    pub fn includes(&self, page: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.contains(&page),
            PageSelection::Ranges(ranges) => ranges.iter().any(|r| r.contains(&page)),
        }
    }

    /// Parse a page selection string (e.g., "1-10", "1,3,5,7-10").
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if s.is_empty() || s == "all" {
            return Ok(PageSelection::All);
        }

        if let Some((start, end)) = s.split_once('-') {
            if !start.contains(',') && !end.contains(',') {
                return Ok(PageSelection::Range(parse_page_range(start, end, s)?));
            }
        }

        let mut ranges = Vec::new();
        let mut singles_only = true;
        for part in s.split(',') {
            if let Some((start, end)) = part.split_once('-') {
                ranges.push(parse_page_range(start, end, s)?);
                singles_only = false;
            } else {
                let p = parse_page_number(part, s)?;
                ranges.push(p..=p);
            }
        }

        if singles_only {
            let mut pages: Vec<u32> = ranges.into_iter().map(|r| *r.start()).collect();
            pages.sort_unstable();
            pages.dedup();
            return Ok(PageSelection::Pages(pages));
        }
        Ok(PageSelection::Ranges(merge_ranges(ranges)))
    }
}

/// Sort ranges and merge the ones that overlap or touch.
fn merge_ranges(mut ranges: Vec<RangeInclusive<u32>>) -> Vec<RangeInclusive<u32>> {
    ranges.sort_unstable_by_key(|r| *r.start());

    let mut merged: Vec<RangeInclusive<u32>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if *range.start() <= last.end().saturating_add(1) => {
                if range.end() > last.end() {
                    *last = *last.start()..=*range.end();
                }
            }
            _ => merged.push(range),
        }
    }
    merged
}

fn parse_page_range(start: &str, end: &str, whole: &str) -> Result<RangeInclusive<u32>> {
    let start = parse_page_number(start, whole)?;
    let end = parse_page_number(end, whole)?;
    if start > end {
        return Err(Error::InvalidPageRange(whole.to_string()));
    }
    Ok(start..=end)
}

fn parse_page_number(part: &str, whole: &str) -> Result<u32> {
    part.trim()
        .parse()
        .map_err(|_| Error::InvalidPageRange(whole.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new().with_page_range(2..=4);
        assert_eq!(options.pages, PageSelection::Range(2..=4));
        assert_eq!(ParseOptions::default().pages, PageSelection::All);
    }

    #[test]
    fn test_page_selection_includes() {
        let all = PageSelection::All;
        assert!(all.includes(1));
        assert!(all.includes(100));

        let range = PageSelection::Range(5..=10);
        assert!(!range.includes(4));
        assert!(range.includes(5));
        assert!(range.includes(10));
        assert!(!range.includes(11));

        let pages = PageSelection::Pages(vec![1, 3, 5, 7]);
        assert!(pages.includes(1));
        assert!(!pages.includes(2));
        assert!(pages.includes(3));
    }

    #[test]
    fn test_page_selection_parse() {
        assert_eq!(PageSelection::parse("all").unwrap(), PageSelection::All);
        assert_eq!(PageSelection::parse("  ").unwrap(), PageSelection::All);
        assert_eq!(
            PageSelection::parse("1-10").unwrap(),
            PageSelection::Range(1..=10)
        );
        assert_eq!(
            PageSelection::parse("5,1,3,5-7,10").unwrap(),
            PageSelection::Ranges(vec![1..=1, 3..=3, 5..=7, 10..=10])
        );
        assert_eq!(
            PageSelection::parse("7, 3,7,1,2").unwrap(),
            PageSelection::Pages(vec![1, 2, 3, 7])
        );
        assert_eq!(
            PageSelection::parse("4-6,1-2,3,8-9").unwrap(),
            PageSelection::Ranges(vec![1..=6, 8..=9])
        );
    }

    #[test]
    fn test_page_selection_parse_reversed_range() {
        let err = PageSelection::parse("5-2").unwrap_err();
        assert!(matches!(err, Error::InvalidPageRange(ref s) if s == "5-2"));
        assert!(matches!(
            PageSelection::parse("1,9-3"),
            Err(Error::InvalidPageRange(_))
        ));
        assert_eq!(PageSelection::parse("4-4").unwrap(), PageSelection::Range(4..=4));
    }

    #[test]
    fn test_page_selection_parse_large_range() {
        let selection = PageSelection::parse("1,1-4294967295").unwrap();
        assert_eq!(selection, PageSelection::Ranges(vec![1..=u32::MAX]));
        assert!(selection.includes(u32::MAX));

        let selection = PageSelection::parse("3,10-4000000000,20").unwrap();
        assert_eq!(
            selection,
            PageSelection::Ranges(vec![3..=3, 10..=4_000_000_000])
        );
        assert!(selection.includes(3_999_999_999));
        assert!(!selection.includes(4));
    }

    #[test]
    fn test_ranges_includes() {
        let ranges = PageSelection::Ranges(vec![1..=2, 10..=20]);
        assert!(ranges.includes(2));
        assert!(!ranges.includes(3));
        assert!(ranges.includes(15));
        assert!(!ranges.includes(21));
    }

    #[test]
    fn test_page_selection_parse_invalid() {
        let err = PageSelection::parse("1-x").unwrap_err();
        assert!(matches!(err, Error::InvalidPageRange(ref s) if s == "1-x"));
        assert!(PageSelection::parse("1,,2").is_err());
    }
}
