//! Line and span types.

use serde::{Deserialize, Serialize};

/// A bounding box given as a numeric array, `[x0, y0, x1, y1]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundingBox(pub Vec<f64>);

impl BoundingBox {
    /// Create a bounding box from its four corners.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self(vec![x0, y0, x1, y1])
    }

    /// Vertical origin (element 1), if the array is long enough.
    pub fn y0(&self) -> Option<f64> {
        self.0.get(1).copied()
    }
}

/// A text fragment with its typography.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Span {
    /// Raw text content
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub text: String,

    /// Font name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,

    /// Font size in points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,

    /// Span bounding box
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span_bbox: Option<BoundingBox>,

    /// Text color as emitted by the extractor (integer or component list)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<serde_json::Value>,

    /// Opacity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,

    /// Bold flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,

    /// Italic flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
}

impl Span {
    /// Create a span with text, font and size.
    pub fn new(text: impl Into<String>, font: impl Into<String>, size: f64) -> Self {
        Self {
            text: text.into(),
            font: Some(font.into()),
            size: Some(size),
            ..Default::default()
        }
    }

    /// Create a span carrying only text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// One visual text line: spans in reading order plus an optional bounding box.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Line {
    /// Line bounding box
    #[serde(
        default,
        rename = "line_bbox",
        alias = "bbox",
        skip_serializing_if = "Option::is_none"
    )]
    pub bbox: Option<BoundingBox>,

    /// Spans in left-to-right order
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub spans: Vec<Span>,
}

impl Line {
    /// Create a line from spans, without a bounding box.
    pub fn new(spans: Vec<Span>) -> Self {
        Self { bbox: None, spans }
    }

    /// Set the bounding box.
    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    /// Vertical origin of the line, used for same-row detection.
    pub fn baseline_y(&self) -> Option<f64> {
        self.bbox.as_ref().and_then(BoundingBox::y0)
    }

    /// First span, if any.
    pub fn first_span(&self) -> Option<&Span> {
        self.spans.first()
    }

    /// Last span, if any.
    pub fn last_span(&self) -> Option<&Span> {
        self.spans.last()
    }

    /// Check if the line has no spans.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Concatenated span text, unmodified.
    pub fn raw_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}
