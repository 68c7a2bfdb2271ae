//! Projects the insertion points of a slide into an HTML page.
//!
//! Each insertion point becomes an absolutely positioned `<div>` whose inline
//! style reproduces the shape's box, alignment and typography; everything else
//! on the slide is expected to come from a background image rendered by the
//! host with the insertion points hidden.
//!
//! # Current Features & Limitations:
//! *   Left, center and right paragraph alignment; other alignments render as left.
//! *   Top, middle and bottom anchors; baseline anchors render as top.
//! *   Fixed-size and grow-to-fit boxes. Shrink-text-to-fit keeps the box size
//!     without shrinking the text.
//! *   One style per shape: the first run's attributes apply to the whole text.
//! *   No right-to-left layout.

mod canvas;
mod constants;
mod error;
mod projector;
mod style;
mod template;
mod utils;

pub use canvas::CanvasContext;
pub use error::{HtmlConversionError, Result};
pub use projector::{HtmlProjector, MarkerPolicy, ProjectionBuffer, ProjectorBuilder};
pub use template::DEFAULT_TEMPLATE;
pub use utils::points_to_pixels;

use log::info;

use crate::models::slide::Slide;

/// Converts a slide into a complete HTML page using the bundled template.
///
/// # Arguments
/// * `slide` - The slide snapshot to read insertion points from.
/// * `canvas_width`, `canvas_height` - Size of the output canvas in pixels.
/// * `background` - Value for the page's `background-image`, if any.
pub fn convert_slide_to_html(
    slide: &Slide,
    canvas_width: u32,
    canvas_height: u32,
    background: Option<&str>,
) -> Result<String> {
    let points = slide.insertion_points();

    let mut projector = HtmlProjector::builder()
        .set_page_size(slide.page_size)
        .set_canvas_size(canvas_width, canvas_height)
        .build()?;
    projector.add_shapes(&points)?;

    info!(
        "Projected {} insertion point(s) onto a {}x{} canvas",
        projector.buffer().len(),
        canvas_width,
        canvas_height
    );
    Ok(projector.html_text(background))
}
