use serde::{Deserialize, Serialize};

/// Position and size of a shape, in slide units.
///
/// Slide units are whatever the host document uses for its page setup (points
/// for PowerPoint). Shapes that sit partly or fully off the slide are passed
/// through unchanged; nothing is clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeGeometry {
    /// Distance of the left edge from the slide's left edge.
    pub left: f64,
    /// Distance of the top edge from the slide's top edge.
    pub top: f64,
    /// Width of the bounding box.
    pub width: f64,
    /// Height of the bounding box.
    pub height: f64,
}

impl ShapeGeometry {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// X coordinate of the horizontal midpoint.
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// X coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Width and height of a slide, in the same units as [`ShapeGeometry`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height. Meaningless for a degenerate page.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}
