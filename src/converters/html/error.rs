use thiserror::Error;

/// Errors that can occur while projecting insertion points to HTML.
#[derive(Error, Debug)]
pub enum HtmlConversionError {
    #[error("Formatting error during HTML generation: {0}")]
    FormatError(#[from] std::fmt::Error),
    #[error("Missing expected data necessary for conversion: {0}")]
    MissingData(String),
    #[error("Invalid canvas configuration: slide size {slide_width} x {slide_height} must be positive")]
    InvalidCanvasConfiguration { slide_width: f64, slide_height: f64 },
}

/// A specialized Result type for HTML projection operations.
pub type Result<T> = std::result::Result<T, HtmlConversionError>;
