use serde::{Deserialize, Serialize};

use crate::collector::{collect_insertion_points, InsertionPoint};
use crate::errors::Result;
use crate::models::common::PageSize;
use crate::models::elements::ShapeNode;
use crate::models::shape::Shape;

/// An in-memory snapshot of one slide, as handed over by the host layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,

    /// Size of the slide, shared by every slide of the presentation.
    pub page_size: PageSize,

    /// Top-level shapes in host order (back to front).
    #[serde(default)]
    pub shapes: Vec<ShapeNode>,
}

impl Slide {
    pub fn new(page_size: PageSize, shapes: Vec<ShapeNode>) -> Self {
        Self {
            object_id: None,
            page_size,
            shapes,
        }
    }

    /// Parses a slide snapshot from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the snapshot back to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Collects the insertion points of this slide in shape-tree order.
    pub fn insertion_points(&self) -> Vec<InsertionPoint> {
        collect_insertion_points(&self.shapes)
    }

    /// Finds a leaf shape by identifier anywhere in the shape tree.
    /// The first match in host order wins.
    pub fn shape_mut(&mut self, object_id: &str) -> Option<&mut Shape> {
        self.shapes
            .iter_mut()
            .find_map(|node| node.shape_mut(object_id))
    }

    /// Finds the shape an insertion point was collected from.
    ///
    /// Resolution goes by position, so shapes sharing an identifier are told
    /// apart. Returns `None` when that position no longer holds a shape with
    /// the point's identifier.
    pub fn shape_for_point_mut(&mut self, point: &InsertionPoint) -> Option<&mut Shape> {
        self.shapes
            .get_mut(point.node_index)?
            .shape_at_mut(&point.origin)
            .filter(|shape| shape.object_id == point.object_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::ShapeGeometry;
    use crate::models::properties::TextStyle;

    const SLIDE_JSON: &str = r#"{
        "pageSize": { "width": 960, "height": 540 },
        "shapes": [
            { "shape": { "objectId": "title", "geometry": { "left": 10, "top": 10, "width": 400, "height": 60 } } },
            { "table": { "rows": [ { "cells": [
                { "shape": { "objectId": "cell-1-1", "geometry": { "left": 0, "top": 100, "width": 50, "height": 20 } } }
            ] } ] } },
            { "group": { "objectId": "group", "members": [
                { "objectId": "member", "geometry": { "left": 0, "top": 0, "width": 1, "height": 1 } }
            ] } }
        ]
    }"#;

    #[test]
    fn test_from_json_reads_all_node_kinds() {
        let slide = Slide::from_json(SLIDE_JSON).unwrap();
        assert_eq!(slide.page_size, PageSize::new(960.0, 540.0));
        assert_eq!(slide.shapes.len(), 3);
        assert!(matches!(slide.shapes[0], ShapeNode::Shape(_)));
        assert!(matches!(slide.shapes[1], ShapeNode::Table(_)));
        assert!(matches!(slide.shapes[2], ShapeNode::Group(_)));
    }

    #[test]
    fn test_shape_mut_searches_containers() {
        let mut slide = Slide::from_json(SLIDE_JSON).unwrap();
        assert!(slide.shape_mut("title").is_some());
        assert!(slide.shape_mut("cell-1-1").is_some());
        assert!(slide.shape_mut("member").is_some());
        assert!(slide.shape_mut("group").is_none());
        assert!(slide.shape_mut("missing").is_none());
    }

    #[test]
    fn test_json_survives_reserialization() {
        let slide = Slide::from_json(SLIDE_JSON).unwrap();
        let json = slide.to_json_pretty().unwrap();
        assert_eq!(Slide::from_json(&json).unwrap(), slide);
    }

    #[test]
    fn test_unknown_word_wrap_survives_reserialization() {
        let style = TextStyle {
            word_wrap: None,
            ..TextStyle::default()
        };
        let slide = Slide::new(
            PageSize::new(960.0, 540.0),
            vec![ShapeNode::Shape(
                Shape::new("mixed", ShapeGeometry::new(0.0, 0.0, 100.0, 20.0))
                    .with_text("{{x}}", style),
            )],
        );

        let json = slide.to_json_pretty().unwrap();
        assert!(json.contains("\"wordWrap\": null"));
        let back = Slide::from_json(&json).unwrap();
        assert_eq!(back, slide);
        assert_eq!(back.insertion_points()[0].style.word_wrap, None);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Slide::from_json("{\"shapes\": []}").is_err());
    }
}
