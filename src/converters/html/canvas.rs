//! Mapping from slide units to output pixels.

use super::error::{HtmlConversionError, Result};
use crate::models::common::PageSize;

/// The output canvas and the slide it represents.
///
/// Horizontal and vertical coordinates scale independently, so a canvas whose
/// aspect ratio differs from the slide's stretches the layout rather than
/// letterboxing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasContext {
    canvas_width: u32,
    canvas_height: u32,
    slide_width: f64,
    slide_height: f64,
}

impl CanvasContext {
    /// Creates a canvas context. Both slide dimensions must be positive.
    pub fn new(
        canvas_width: u32,
        canvas_height: u32,
        slide_width: f64,
        slide_height: f64,
    ) -> Result<Self> {
        // Written so NaN is rejected as well.
        if !(slide_width > 0.0 && slide_height > 0.0) {
            return Err(HtmlConversionError::InvalidCanvasConfiguration {
                slide_width,
                slide_height,
            });
        }
        Ok(Self {
            canvas_width,
            canvas_height,
            slide_width,
            slide_height,
        })
    }

    pub fn from_page(page: PageSize, canvas_width: u32, canvas_height: u32) -> Result<Self> {
        Self::new(canvas_width, canvas_height, page.width, page.height)
    }

    /// Picks the largest canvas that fits within `max_width` x `max_height`
    /// while keeping the slide's aspect ratio.
    pub fn fit(page: PageSize, max_width: u32, max_height: u32) -> Result<Self> {
        // Validate first so the ratio below is finite and positive.
        Self::new(max_width, max_height, page.width, page.height)?;
        let ratio = page.aspect_ratio();
        let (width, height) = if max_width as f64 > max_height as f64 * ratio {
            let width = (max_height as f64 * ratio).round() as u32;
            (width.min(max_width), max_height)
        } else {
            let height = (max_width as f64 / ratio).round() as u32;
            (max_width, height.min(max_height))
        };
        Self::new(width, height, page.width, page.height)
    }

    pub fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    pub fn slide_width(&self) -> f64 {
        self.slide_width
    }

    pub fn slide_height(&self) -> f64 {
        self.slide_height
    }

    /// Pixels per slide unit along the x axis.
    pub fn scale_x(&self) -> f64 {
        self.canvas_width as f64 / self.slide_width
    }

    /// Pixels per slide unit along the y axis.
    pub fn scale_y(&self) -> f64 {
        self.canvas_height as f64 / self.slide_height
    }

    /// Converts a horizontal distance to whole pixels.
    pub fn to_pixels_x(&self, value: f64) -> i64 {
        (value * self.canvas_width as f64 / self.slide_width).round() as i64
    }

    /// Converts a vertical distance to whole pixels.
    pub fn to_pixels_y(&self, value: f64) -> i64 {
        (value * self.canvas_height as f64 / self.slide_height).round() as i64
    }

    /// Converts a font size in points to pixels.
    ///
    /// Uses the horizontal scale only: text has to fit the width of its box.
    /// Not rounded.
    pub fn font_size_px(&self, points: f64) -> f64 {
        (points * self.canvas_width as f64) / self.slide_width
    }
}
