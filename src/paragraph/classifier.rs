//! Paragraph boundary classification.

use crate::model::Line;

use super::StyleKey;

/// Separator written for tabs and for runs joined on one visual row.
pub const SEPARATOR: char = '|';

/// What to do with a line relative to the paragraph being accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The line has no spans; nothing changes.
    Skip,
    /// Append the line's text to the current paragraph.
    Append,
    /// Append after a `|`: the line continues the previous visual row.
    JoinRow,
    /// Close the current paragraph, then start a new one with this line.
    Break,
}

/// What the classifier remembers about the previously appended line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryState {
    /// Style key of the last span of the previous line
    pub last_style: Option<StyleKey>,

    /// Vertical origin of the most recent line that had a bounding box
    pub last_baseline_y: Option<f64>,
}

/// Classify `line` given the text accumulated so far.
///
/// Returns the decision and the state to carry to the next line. For
/// [`Decision::Skip`] the returned state equals `state`.
pub fn classify(state: &BoundaryState, current: &str, line: &Line) -> (Decision, BoundaryState) {
    let (Some(first), Some(last)) = (line.first_span(), line.last_span()) else {
        return (Decision::Skip, state.clone());
    };

    let baseline_y = line.baseline_y();
    let decision = if current.is_empty() {
        Decision::Append
    } else {
        let same_row = matches!(
            (state.last_baseline_y, baseline_y),
            (Some(prev), Some(y)) if prev == y
        );
        let open_ended = matches!(current.chars().next_back(), Some(' ' | SEPARATOR));

        if same_row && open_ended {
            Decision::JoinRow
        } else {
            let style = StyleKey::from_span(first);
            let sentence_end = matches!(current.chars().next_back(), Some('.' | '?' | '!'));
            if sentence_end || state.last_style.as_ref() != Some(&style) {
                Decision::Break
            } else {
                Decision::Append
            }
        }
    };

    let next = BoundaryState {
        last_style: Some(StyleKey::from_span(last)),
        last_baseline_y: baseline_y.or(state.last_baseline_y),
    };

    (decision, next)
}

/// Text of a line as it enters a paragraph: span texts concatenated, tabs as `|`.
pub fn line_text(line: &Line) -> String {
    line.spans
        .iter()
        .flat_map(|span| span.text.chars())
        .map(|c| if c == '\t' { SEPARATOR } else { c })
        .collect()
}
