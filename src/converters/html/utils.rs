//! Utility functions for HTML projection: escaping, marker handling and unit
//! conversion.

use super::constants::{PT_PER_INCH, PX_PER_INCH};
use crate::collector::{CLOSE_MARKER, OPEN_MARKER};

// --- Text Escaping ---

/// Escapes special HTML characters (`&`, `<`, `>`) for use in element content.
pub fn escape_html_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes a value placed inside a single-quoted CSS string within a
/// double-quoted HTML attribute.
pub fn escape_css_string(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('&', "&amp;")
        .replace('"', "&quot;")
}

// --- Markers ---

/// Removes every insertion-point marker from `text`, keeping what they enclose.
pub fn strip_markers(text: &str) -> String {
    text.replace(OPEN_MARKER, "").replace(CLOSE_MARKER, "")
}

// --- Unit Conversion ---

/// Converts points to CSS pixels (1pt = 1/72in, 1px = 1/96in).
pub fn points_to_pixels(points: f64) -> f64 {
    (points * PX_PER_INCH) / PT_PER_INCH
}
