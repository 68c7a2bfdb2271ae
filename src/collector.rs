//! Finds the insertion points of a slide and hides them before raster export.
//!
//! An insertion point is any shape whose text contains a `{{` followed later by
//! a `}}`. Tables contribute their cells and groups their members; neither is
//! recursed into further.

use log::debug;

use crate::errors::{Result, SlideLayoutError};
use crate::models::{
    common::ShapeGeometry,
    elements::ShapeNode,
    properties::TextStyle,
    shape::Shape,
    slide::Slide,
};

/// Opening marker of an insertion point.
pub const OPEN_MARKER: &str = "{{";
/// Closing marker of an insertion point.
pub const CLOSE_MARKER: &str = "}}";

/// Where on the slide an insertion point was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// A top-level shape.
    Slide,
    /// A table cell, 1-based.
    TableCell { row: usize, column: usize },
    /// A member of a group, 0-based position within the group.
    GroupMember { group_id: String, index: usize },
}

/// A shape selected for layout projection.
///
/// This is a snapshot: it copies what the projector needs and keeps the shape
/// identifier so the host shape can be hidden afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertionPoint {
    pub object_id: String,
    /// Index of the top-level node holding the shape.
    pub node_index: usize,
    pub origin: Origin,
    pub geometry: ShapeGeometry,
    pub style: TextStyle,
    /// The full text of the shape, markers included.
    pub text: String,
}

impl InsertionPoint {
    fn from_shape(shape: &Shape, node_index: usize, origin: Origin) -> Option<Self> {
        let frame = shape.text_frame.as_ref()?;
        Some(Self {
            object_id: shape.object_id.clone(),
            node_index,
            origin,
            geometry: shape.geometry,
            style: frame.style.clone(),
            text: frame.text.clone(),
        })
    }
}

/// Returns true if `text` contains an opening marker followed by a closing one.
///
/// Only the first occurrence of each marker counts, so `"}} {{"` is rejected
/// even though it contains both.
pub fn text_contains_insertion_point(text: &str) -> bool {
    match (text.find(OPEN_MARKER), text.find(CLOSE_MARKER)) {
        (Some(start), Some(end)) => start < end,
        _ => false,
    }
}

/// Returns true if the shape has a text frame whose text is an insertion point.
pub fn contains_insertion_point(shape: &Shape) -> bool {
    shape.text().is_some_and(text_contains_insertion_point)
}

/// Walks the top-level shapes of a slide and returns its insertion points in
/// host order.
///
/// Tables are read row by row, cell by cell; groups contribute their
/// immediate members. Empty tables and rows contribute nothing.
pub fn collect_insertion_points(shapes: &[ShapeNode]) -> Vec<InsertionPoint> {
    let mut collected = Vec::new();

    for (node_index, node) in shapes.iter().enumerate() {
        match node {
            ShapeNode::Table(table) => {
                for (row, column, cell) in table.cells() {
                    let origin = Origin::TableCell { row, column };
                    collect_shape(&cell.shape, node_index, origin, &mut collected);
                }
            }
            ShapeNode::Group(group) => {
                for (index, member) in group.members.iter().enumerate() {
                    let origin = Origin::GroupMember {
                        group_id: group.object_id.clone(),
                        index,
                    };
                    collect_shape(member, node_index, origin, &mut collected);
                }
            }
            ShapeNode::Shape(shape) => {
                collect_shape(shape, node_index, Origin::Slide, &mut collected)
            }
        }
    }

    debug!("Collected {} insertion point(s)", collected.len());
    collected
}

fn collect_shape(
    shape: &Shape,
    node_index: usize,
    origin: Origin,
    collected: &mut Vec<InsertionPoint>,
) {
    if !contains_insertion_point(shape) {
        return;
    }
    if let Some(point) = InsertionPoint::from_shape(shape, node_index, origin) {
        debug!(
            "Insertion point '{}' found at {:?}",
            point.object_id, point.origin
        );
        collected.push(point);
    }
}

/// A host shape whose text can be made invisible.
pub trait Hideable {
    /// Makes the text fill fully transparent.
    fn set_transparent(&mut self);
    /// Removes the text content.
    fn clear_text(&mut self);
}

impl Hideable for Shape {
    fn set_transparent(&mut self) {
        if let Some(frame) = self.text_frame.as_mut() {
            frame.style.fill_transparency = 1.0;
        }
    }

    fn clear_text(&mut self) {
        if let Some(frame) = self.text_frame.as_mut() {
            frame.text.clear();
        }
    }
}

/// Resolves insertion points back to the host shapes they were taken from.
pub trait HideTarget {
    type Shape: Hideable;

    fn resolve(&mut self, point: &InsertionPoint) -> Option<&mut Self::Shape>;
}

impl HideTarget for Slide {
    type Shape = Shape;

    fn resolve(&mut self, point: &InsertionPoint) -> Option<&mut Shape> {
        self.shape_for_point_mut(point)
    }
}

/// Hides every insertion point on the host so a later raster export of the
/// slide leaves their text out.
///
/// Fails on the first point whose shape cannot be resolved; points handled
/// before it stay hidden.
pub fn hide_insertion_points<T: HideTarget>(
    points: &[InsertionPoint],
    target: &mut T,
) -> Result<()> {
    for point in points {
        let shape = target
            .resolve(point)
            .ok_or_else(|| SlideLayoutError::ShapeNotFound(point.object_id.clone()))?;
        shape.set_transparent();
        shape.clear_text();
        debug!("Hid insertion point '{}'", point.object_id);
    }
    Ok(())
}
