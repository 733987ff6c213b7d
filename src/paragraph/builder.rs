//! Paragraph accumulation.

use std::mem;

use crate::model::{LayoutDocument, Line, Paragraph};
use crate::parser::{flatten, FlatLine};

use super::{classify, line_text, BoundaryState, Decision, SEPARATOR};

/// Accumulates lines into paragraphs, one line at a time.
///
/// # Example
///
/// ```
/// use parahtml::model::{Line, Span};
/// use parahtml::paragraph::ParagraphBuilder;
///
/// let mut builder = ParagraphBuilder::new();
/// builder.push_line(1, &Line::new(vec![Span::new("First.", "Times", 10.0)]));
/// builder.push_line(1, &Line::new(vec![Span::new("Second", "Times", 10.0)]));
///
/// let paragraphs = builder.finish();
/// assert_eq!(paragraphs.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ParagraphBuilder {
    paragraphs: Vec<Paragraph>,
    current: String,
    current_lines: u32,
    current_page: u32,
    state: BoundaryState,
}

impl ParagraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next line, found on `page`, and return what was decided for it.
    pub fn push_line(&mut self, page: u32, line: &Line) -> Decision {
        let (decision, state) = classify(&self.state, &self.current, line);

        match decision {
            Decision::Skip => return decision,
            Decision::Break => {
                log::trace!(
                    "Paragraph break on page {} after {:?}",
                    page,
                    tail(&self.current, 24)
                );
                self.flush();
            }
            Decision::JoinRow => self.current.push(SEPARATOR),
            Decision::Append => {}
        }

        if self.current_lines == 0 {
            self.current_page = page;
        }
        self.current.push_str(&line_text(line));
        self.current_lines += 1;
        self.state = state;

        decision
    }

    /// Text of the paragraph currently being accumulated.
    pub fn current_text(&self) -> &str {
        &self.current
    }

    /// Paragraphs completed so far.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Close the last paragraph and return all of them.
    pub fn finish(mut self) -> Vec<Paragraph> {
        self.flush();
        self.paragraphs
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.paragraphs.push(Paragraph {
                text: mem::take(&mut self.current),
                line_count: self.current_lines,
                page: self.current_page,
            });
        }
        self.current_lines = 0;
    }
}

/// The last `max_chars` characters of `text`.
fn tail(text: &str, max_chars: usize) -> &str {
    if max_chars == 0 {
        return "";
    }
    match text.char_indices().rev().nth(max_chars - 1) {
        Some((i, _)) => &text[i..],
        None => text,
    }
}

/// Segment flattened lines into paragraphs.
pub fn segment(lines: &[FlatLine<'_>]) -> Vec<Paragraph> {
    let mut builder = ParagraphBuilder::new();
    for flat in lines {
        builder.push_line(flat.page, flat.line);
    }
    let paragraphs = builder.finish();

    log::debug!(
        "Segmented {} lines into {} paragraphs",
        lines.len(),
        paragraphs.len()
    );

    paragraphs
}

/// Flatten a document and segment its lines into paragraphs.
pub fn segment_document(doc: &LayoutDocument) -> Vec<Paragraph> {
    segment(&flatten(doc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, BoundingBox, Page, Span, Zone};

    fn line_at(text: &str, font: &str, size: f64, y: f64) -> Line {
        Line::new(vec![Span::new(text, font, size)]).with_bbox(BoundingBox::new(0.0, y, 100.0, y + 10.0))
    }

    fn texts(lines: &[Line]) -> Vec<String> {
        let mut builder = ParagraphBuilder::new();
        for line in lines {
            builder.push_line(1, line);
        }
        builder.finish().into_iter().map(|p| p.text).collect()
    }

    fn document(pages: Vec<Vec<Line>>) -> LayoutDocument {
        let mut doc = LayoutDocument::new();
        for (i, lines) in pages.into_iter().enumerate() {
            let mut zone = Zone::new();
            zone.add_block(Block::new(lines));
            let mut page = Page::new(i as u32 + 1);
            page.add_zone(zone);
            doc.add_page(page);
        }
        doc
    }

    #[test]
    fn test_same_row_continuation() {
        let lines = [line_at("Hello ", "F", 10.0, 100.0), line_at("World", "F", 10.0, 100.0)];
        assert_eq!(texts(&lines), vec!["Hello |World"]);
    }

    #[test]
    fn test_split_after_period_on_style_change() {
        let lines = [
            line_at("This is a sentence.", "Regular", 10.0, 100.0),
            line_at("Heading", "Bold", 14.0, 120.0),
        ];
        assert_eq!(texts(&lines), vec!["This is a sentence.", "Heading"]);
    }

    #[test]
    fn test_tab_becomes_separator() {
        let lines = [line_at("Name\tValue", "F", 10.0, 100.0)];
        assert_eq!(texts(&lines), vec!["Name|Value"]);
    }

    #[test]
    fn test_wrapped_paragraph() {
        let lines = [
            line_at("The quick brown fox ", "F", 10.0, 100.0),
            line_at("jumps over the lazy ", "F", 10.1, 112.0),
            line_at("dog. ", "F", 9.9, 124.0),
            line_at("Next paragraph.", "F", 10.0, 150.0),
        ];
        assert_eq!(
            texts(&lines),
            vec!["The quick brown fox jumps over the lazy dog. Next paragraph."]
        );
    }

    #[test]
    fn test_abbreviation_at_line_end_splits() {
        let lines = [
            line_at("Fruit, e.g.", "F", 10.0, 100.0),
            line_at("apples", "F", 10.0, 112.0),
        ];
        assert_eq!(texts(&lines), vec!["Fruit, e.g.", "apples"]);
    }

    #[test]
    fn test_empty_lines_are_ignored() {
        let with_empty = [
            line_at("One ", "F", 10.0, 100.0),
            Line::default(),
            line_at("two.", "F", 10.0, 112.0),
            Line::default(),
            line_at("Three", "G", 12.0, 130.0),
        ];
        let without_empty = [with_empty[0].clone(), with_empty[2].clone(), with_empty[4].clone()];
        assert_eq!(texts(&with_empty), texts(&without_empty));
        assert_eq!(texts(&with_empty), vec!["One two.", "Three"]);
    }

    #[test]
    fn test_push_line_reports_decisions() {
        let mut builder = ParagraphBuilder::new();
        assert_eq!(builder.push_line(1, &line_at("a ", "F", 10.0, 0.0)), Decision::Append);
        assert_eq!(builder.push_line(1, &line_at("b", "F", 10.0, 0.0)), Decision::JoinRow);
        assert_eq!(builder.push_line(1, &Line::default()), Decision::Skip);
        assert_eq!(builder.push_line(1, &line_at("c", "G", 10.0, 20.0)), Decision::Break);
        assert_eq!(builder.current_text(), "c");
        assert_eq!(builder.paragraphs().len(), 1);
        assert_eq!(builder.paragraphs()[0].text, "a |b");
        assert_eq!(builder.paragraphs()[0].line_count, 2);
    }

    #[test]
    fn test_segment_document_tracks_pages() {
        let doc = document(vec![
            vec![line_at("Intro.", "F", 10.0, 100.0)],
            vec![],
            vec![line_at("Body starts ", "F", 10.0, 100.0), line_at("here", "F", 10.0, 112.0)],
        ]);
        let paragraphs = segment_document(&doc);
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].page, 1);
        assert_eq!(paragraphs[1].page, 3);
        assert_eq!(paragraphs[1].text, "Body starts here");
        assert_eq!(paragraphs[1].line_count, 2);
    }

    #[test]
    fn test_paragraph_spans_pages() {
        let doc = document(vec![
            vec![line_at("continued on the ", "F", 10.0, 700.0)],
            vec![line_at("next page", "F", 10.0, 50.0)],
        ]);
        let paragraphs = segment_document(&doc);
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].text, "continued on the next page");
        assert_eq!(paragraphs[0].page, 1);
    }

    #[test]
    fn test_tail_keeps_reading_order() {
        assert_eq!(tail("This ends a sentence.", 9), "sentence.");
        assert_eq!(tail("short", 24), "short");
        assert_eq!(tail("日本語の文章。", 3), "文章。");
        assert_eq!(tail("abc", 0), "");
    }

    #[test]
    fn test_no_lines() {
        assert!(segment_document(&LayoutDocument::new()).is_empty());
        assert!(segment(&[]).is_empty());
    }

    #[test]
    fn test_text_is_preserved() {
        let lines = [
            line_at("Title", "Bold", 18.0, 40.0),
            line_at("Col A\tCol B ", "F", 10.0, 80.0),
            line_at("Col C", "F", 10.0, 80.0),
            line_at("Body text that ", "F", 10.0, 100.0),
            line_at("wraps. ", "F", 10.0, 112.0),
            line_at("Done!", "F", 10.0, 124.0),
        ];
        let joined: String = texts(&lines).concat().replace(SEPARATOR, "");
        let expected: String = lines.iter().map(|l| l.raw_text().replace('\t', "")).collect();
        assert_eq!(joined, expected);
        assert!(texts(&lines).len() <= lines.len());
    }
}
