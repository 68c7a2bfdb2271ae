//! Projects the tagged text regions ("insertion points") of a presentation
//! slide into an HTML page with pixel positions and CSS styling, leaving the
//! rest of the slide to a raster background.

pub mod background;
pub mod collector;
pub mod converters;
pub mod errors;
pub mod models;
pub mod wasm;

pub use collector::{
    collect_insertion_points, contains_insertion_point, hide_insertion_points, HideTarget,
    Hideable, InsertionPoint,
};
pub use converters::html::{convert_slide_to_html, HtmlProjector};
pub use errors::{Result, SlideLayoutError};
pub use models::slide::Slide;
