//! Builds the inline CSS declaration block of one insertion point.
//!
//! Each `apply_*` function appends declarations for one concern. The container
//! is expected to be an absolutely positioned flex box (see the `.shape` rule
//! of the page template), so alignment maps onto flex properties.

use log::warn;

use super::{
    canvas::CanvasContext,
    constants::DEFAULT_FONT_FAMILY,
    error::Result,
    utils::{escape_css_string, points_to_pixels},
};
use crate::models::{
    common::ShapeGeometry,
    properties::{AutoSize, LineSpacing, ParagraphAlignment, TextStyle, VerticalAnchor},
};
use std::fmt::Write;

/// The edge or point a shape's horizontal position is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HorizontalAnchor {
    /// `left` is the shape's left edge.
    Left,
    /// `left` is the shape's midpoint; the box is shifted back by half its width.
    Center,
    /// `right` is the distance from the slide's right edge.
    Right,
}

/// Resolves the paragraph alignment into the positioning anchor and the
/// flex main-axis alignment. Unsupported alignments fall back to left.
pub(crate) fn horizontal_alignment(
    alignment: ParagraphAlignment,
) -> (HorizontalAnchor, &'static str) {
    match alignment {
        ParagraphAlignment::Left => (HorizontalAnchor::Left, "flex-start"),
        ParagraphAlignment::Center => (HorizontalAnchor::Center, "center"),
        ParagraphAlignment::Right => (HorizontalAnchor::Right, "flex-end"),
        other => {
            // Right-to-left text is not taken into account either.
            warn!("Paragraph alignment {:?} is not supported, using left", other);
            (HorizontalAnchor::Left, "flex-start")
        }
    }
}

/// Resolves the vertical anchor into the flex cross-axis alignment.
/// Unsupported anchors fall back to top.
pub(crate) fn vertical_alignment(anchor: VerticalAnchor) -> &'static str {
    match anchor {
        VerticalAnchor::Top => "flex-start",
        VerticalAnchor::Middle => "center",
        VerticalAnchor::Bottom => "flex-end",
        other => {
            warn!("Vertical anchor {:?} is not supported, using top", other);
            "flex-start"
        }
    }
}

/// Margins become padding, in CSS shorthand order (top right bottom left).
pub(crate) fn apply_padding(
    style: &TextStyle,
    canvas: &CanvasContext,
    css: &mut String,
) -> Result<()> {
    let margins = &style.margins;
    write!(
        css,
        "padding: {}px {}px {}px {}px;",
        canvas.to_pixels_y(margins.top),
        canvas.to_pixels_x(margins.right),
        canvas.to_pixels_y(margins.bottom),
        canvas.to_pixels_x(margins.left)
    )?;
    Ok(())
}

/// Writes the alignment and the position of the box.
///
/// The horizontal alignment decides which edge the box is positioned from,
/// the flex content alignment and the text alignment, all three together.
pub(crate) fn apply_position(
    geometry: &ShapeGeometry,
    style: &TextStyle,
    canvas: &CanvasContext,
    css: &mut String,
) -> Result<()> {
    write!(css, "align-items: {};", vertical_alignment(style.vertical_anchor))?;

    let (anchor, justify_content) = horizontal_alignment(style.alignment);
    write!(css, "justify-content: {};", justify_content)?;

    match anchor {
        HorizontalAnchor::Left => {
            write!(css, "left: {}px;", canvas.to_pixels_x(geometry.left))?;
            write!(css, "text-align: left;")?;
        }
        HorizontalAnchor::Center => {
            write!(css, "left: {}px;", canvas.to_pixels_x(geometry.center_x()))?;
            write!(css, "text-align: center;")?;
            write!(css, "transform: translate(-50%, 0);")?;
        }
        HorizontalAnchor::Right => {
            let distance = canvas.slide_width() - geometry.right();
            write!(css, "right: {}px;", canvas.to_pixels_x(distance))?;
            write!(css, "text-align: right;")?;
        }
    }

    write!(css, "width: {}px;", canvas.to_pixels_x(geometry.width))?;
    write!(css, "top: {}px;", canvas.to_pixels_y(geometry.top))?;
    Ok(())
}

/// Writes the box size according to the autosize mode.
///
/// Shrinking text to fit is not implemented; such boxes keep their size.
/// Boxes that grow with their text are left to the browser, overriding the
/// width written by [`apply_position`].
pub(crate) fn apply_sizing(
    geometry: &ShapeGeometry,
    style: &TextStyle,
    canvas: &CanvasContext,
    css: &mut String,
) -> Result<()> {
    match style.auto_size {
        AutoSize::None | AutoSize::TextToFitShape => {
            write!(css, "width: {}px;", canvas.to_pixels_x(geometry.width))?;
            write!(css, "height: {}px;", canvas.to_pixels_y(geometry.height))?;
        }
        AutoSize::ShapeToFitText => {
            write!(css, "width: auto;")?;
            write!(css, "height: auto;")?;
        }
        AutoSize::Other => {
            warn!("Mixed autosize mode, keeping only the box width");
        }
    }
    Ok(())
}

/// Writes the white-space handling. Nothing is written when wrapping is unknown.
pub(crate) fn apply_word_wrap(style: &TextStyle, css: &mut String) -> Result<()> {
    match style.word_wrap {
        Some(true) => write!(css, "white-space: pre-wrap;overflow-wrap: break-word;")?,
        Some(false) => write!(css, "white-space: pre;")?,
        None => {}
    }
    Ok(())
}

/// Writes font family, size, style flags and text decoration.
///
/// Flags only ever switch a property on; an unset flag writes nothing.
pub(crate) fn apply_typography(
    style: &TextStyle,
    canvas: &CanvasContext,
    css: &mut String,
) -> Result<()> {
    let family = style.font_family.as_deref().unwrap_or(DEFAULT_FONT_FAMILY);
    write!(css, "font-family: '{}';", escape_css_string(family))?;
    write!(css, "font-size: {}px;", canvas.font_size_px(style.font_size))?;

    if style.italic == Some(true) {
        write!(css, "font-style: italic;")?;
    }
    if style.bold == Some(true) {
        write!(css, "font-weight: bold;")?;
    }
    if style.all_caps == Some(true) {
        write!(css, "text-transform: uppercase;")?;
    }

    let mut decorations = Vec::new();
    if style.underline.is_underlined() {
        decorations.push("underline");
    }
    if style.strikethrough == Some(true) {
        decorations.push("line-through");
    }
    if !decorations.is_empty() {
        write!(css, "text-decoration: {};", decorations.join(" "))?;
    }
    Ok(())
}

/// Writes the line height.
///
/// A multiple is written unitless, except single spacing which is the browser
/// default anyway. An absolute spacing is converted from points to pixels at
/// the fixed CSS ratio, independent of the canvas scale.
pub(crate) fn apply_line_height(style: &TextStyle, css: &mut String) -> Result<()> {
    match style.line_spacing {
        LineSpacing::Multiple(factor) => {
            if factor != 1.0 {
                write!(css, "line-height: {};", factor)?;
            }
        }
        LineSpacing::Points(points) => {
            write!(css, "line-height: {}px;", points_to_pixels(points))?;
        }
    }
    Ok(())
}

pub(crate) fn apply_color(style: &TextStyle, css: &mut String) -> Result<()> {
    write!(css, "color: {};", style.fill_color.to_hex())?;
    Ok(())
}

/// Builds the complete declaration block for a shape.
pub(crate) fn build_shape_style(
    geometry: &ShapeGeometry,
    style: &TextStyle,
    canvas: &CanvasContext,
) -> Result<String> {
    let mut css = String::new();
    apply_padding(style, canvas, &mut css)?;
    apply_position(geometry, style, canvas, &mut css)?;
    apply_sizing(geometry, style, canvas, &mut css)?;
    apply_word_wrap(style, &mut css)?;
    apply_typography(style, canvas, &mut css)?;
    apply_line_height(style, &mut css)?;
    apply_color(style, &mut css)?;
    Ok(css)
}
