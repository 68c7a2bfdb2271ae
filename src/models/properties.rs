// src/models/properties.rs

use serde::{Deserialize, Serialize};

use crate::models::colors::RgbColor;

/// Default inset of the text box's left and right edges, in points.
pub const DEFAULT_HORIZONTAL_MARGIN: f64 = 7.2;
/// Default inset of the text box's top and bottom edges, in points.
pub const DEFAULT_VERTICAL_MARGIN: f64 = 3.6;
/// Font size the host applies to new text boxes, in points.
pub const DEFAULT_FONT_SIZE_PT: f64 = 18.0;

/// Insets between the shape's bounding box and its text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: DEFAULT_HORIZONTAL_MARGIN,
            right: DEFAULT_HORIZONTAL_MARGIN,
            top: DEFAULT_VERTICAL_MARGIN,
            bottom: DEFAULT_VERTICAL_MARGIN,
        }
    }
}

/// Vertical placement of text inside its box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerticalAnchor {
    #[default]
    Top,
    Middle,
    Bottom,
    /// Anchored to the first baseline. Not projected; treated as top.
    TopBaseline,
    /// Anchored to the last baseline. Not projected; treated as top.
    BottomBaseline,
    /// Any anchor this crate does not know about.
    #[serde(other)]
    Other,
}

/// Horizontal alignment of the paragraphs in a text box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParagraphAlignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
    Distribute,
    #[serde(other)]
    Other,
}

/// How the host sizes a text box relative to its text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AutoSize {
    /// The box keeps its size regardless of the text.
    #[default]
    None,
    /// The text shrinks to fit inside the box.
    TextToFitShape,
    /// The box grows to fit the text.
    ShapeToFitText,
    /// Mixed or unknown setting.
    #[serde(other)]
    Other,
}

/// Underline style of a text range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnderlineStyle {
    #[default]
    None,
    Single,
    Double,
    Heavy,
    Dotted,
    Dashed,
    Wavy,
}

impl UnderlineStyle {
    pub fn is_underlined(&self) -> bool {
        *self != UnderlineStyle::None
    }
}

/// Spacing between lines within a paragraph.
///
/// The host stores a single number and a flag saying how to read it; here the
/// two are one value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineSpacing {
    /// A multiple of the font's natural line height (`1.0` is single spacing).
    Multiple(f64),
    /// An absolute distance between baselines, in points.
    Points(f64),
}

impl Default for LineSpacing {
    fn default() -> Self {
        LineSpacing::Multiple(1.0)
    }
}

/// The text attributes of a shape that take part in layout projection.
///
/// Tri-state flags follow the host: `Some(true)` means set for the whole
/// range, `Some(false)` means unset, `None` means mixed or unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    pub margins: Margins,
    pub vertical_anchor: VerticalAnchor,
    pub alignment: ParagraphAlignment,
    pub auto_size: AutoSize,
    /// Whether lines wrap at the box edge. `None` leaves it to the browser.
    ///
    /// An absent key means wrapping; `None` is written as an explicit `null`.
    pub word_wrap: Option<bool>,
    /// Font family name. Falls back to the host default when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Font size in points.
    pub font_size: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_caps: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    pub underline: UnderlineStyle,
    pub line_spacing: LineSpacing,
    /// Color of the text fill.
    pub fill_color: RgbColor,
    /// Transparency of the text fill, from 0.0 (opaque) to 1.0 (invisible).
    pub fill_transparency: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            vertical_anchor: VerticalAnchor::default(),
            alignment: ParagraphAlignment::default(),
            auto_size: AutoSize::default(),
            word_wrap: Some(true),
            font_family: None,
            font_size: DEFAULT_FONT_SIZE_PT,
            italic: None,
            bold: None,
            all_caps: None,
            strikethrough: None,
            underline: UnderlineStyle::default(),
            line_spacing: LineSpacing::default(),
            fill_color: RgbColor::BLACK,
            fill_transparency: 0.0,
        }
    }
}
