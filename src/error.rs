//! Error types for parahtml library.

use std::io;
use thiserror::Error;

/// Result type alias for parahtml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading a layout or rendering paragraphs.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The layout description is not valid JSON or has the wrong shape.
    #[error("Layout JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error during rendering (HTML, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),
}
