//! Defines constants used throughout the HTML projection.

// CSS absolute lengths: 1in = 72pt = 96px.
pub const PT_PER_INCH: f64 = 72.0;
pub const PX_PER_INCH: f64 = 96.0;

// Template tokens.
pub const WIDTH_TOKEN: &str = "$$width$$";
pub const HEIGHT_TOKEN: &str = "$$height$$";
pub const BACKGROUND_TOKEN: &str = "$$background$$";
pub const SHAPES_TOKEN: &str = "$$shapes$$";

/// Substituted for the background token when no background is supplied.
pub const NO_BACKGROUND: &str = "none";

/// Font used when a shape does not name one (the host's theme body font).
pub const DEFAULT_FONT_FAMILY: &str = "Calibri";

/// Class of the positioned container emitted for each insertion point.
pub const SHAPE_CLASS: &str = "shape";
