use serde::{Deserialize, Serialize};

use crate::models::common::ShapeGeometry;
use crate::models::properties::TextStyle;

/// The text container of a shape: its raw text and the style applied to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFrame {
    /// Raw text of the frame. Paragraph breaks are kept as the host reports them.
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub style: TextStyle,
}

impl TextFrame {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Whether the frame holds any text at all.
    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }
}

/// A leaf shape on a slide, in a table cell, or inside a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    /// Identifier of the shape within its slide.
    pub object_id: String,

    /// Display name the host shows in its selection pane.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub geometry: ShapeGeometry,

    /// Absent for shapes that cannot hold text (pictures, lines, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_frame: Option<TextFrame>,
}

impl Shape {
    pub fn new(object_id: impl Into<String>, geometry: ShapeGeometry) -> Self {
        Self {
            object_id: object_id.into(),
            name: None,
            geometry,
            text_frame: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>, style: TextStyle) -> Self {
        self.text_frame = Some(TextFrame::new(text, style));
        self
    }

    /// The text of the shape, if it has a text frame holding text.
    pub fn text(&self) -> Option<&str> {
        self.text_frame
            .as_ref()
            .filter(|frame| frame.has_text())
            .map(|frame| frame.text.as_str())
    }
}
