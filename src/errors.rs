use thiserror::Error;

use crate::converters::html::HtmlConversionError;

/// Represents errors that can occur while loading a slide snapshot, collecting
/// its insertion points or projecting them to HTML.
#[derive(Error, Debug)]
pub enum SlideLayoutError {
    /// Error raised by the HTML projector (invalid canvas, formatting failure).
    #[error("HTML conversion failed: {0}")]
    Conversion(#[from] HtmlConversionError),

    /// The slide snapshot could not be (de)serialized.
    #[error("Failed to process slide snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An insertion point refers to a shape the host can no longer resolve.
    #[error("Shape not found on slide: {0}")]
    ShapeNotFound(String),

    /// An I/O error occurred, e.g. while reading a snapshot or a background image.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for `Result<T, SlideLayoutError>` for convenience within the crate.
pub type Result<T> = std::result::Result<T, SlideLayoutError>;
