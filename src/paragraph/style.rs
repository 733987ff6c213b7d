//! Style keys.

use std::fmt;

use crate::model::Span;

/// Typographic signature of a span: font name and size to the nearest half point.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleKey {
    font: Option<String>,
    half_points: Option<i64>,
}

impl StyleKey {
    /// Derive the style key of a span.
    ///
    /// Sizes are rounded to the nearest 0.5 with halves rounding up, so
    /// 10.2 and 9.8 both give 10 while 10.25 gives 10.5.
    pub fn from_span(span: &Span) -> Self {
        let half_points = span
            .size
            .filter(|size| size.is_finite())
            .map(|size| (size * 2.0 + 0.5).floor() as i64);

        Self {
            font: span.font.clone(),
            half_points,
        }
    }

    /// Font name.
    pub fn font(&self) -> Option<&str> {
        self.font.as_deref()
    }

    /// Rounded size in points.
    pub fn size(&self) -> Option<f64> {
        self.half_points.map(|h| h as f64 / 2.0)
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-", self.font().unwrap_or_default())?;
        match self.size() {
            Some(size) => write!(f, "{}", size),
            None => Ok(()),
        }
    }
}
