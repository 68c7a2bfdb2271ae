// src/models/elements.rs

use serde::{Deserialize, Serialize};

use crate::collector::Origin;
use crate::models::group::Group;
use crate::models::shape::Shape;
use crate::models::table::Table;

/// A top-level node of a slide's shape tree.
///
/// The JSON representation uses the variant name as the key
/// (e.g. `"shape": {...}`, `"table": {...}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeNode {
    /// A leaf shape.
    Shape(Shape),
    /// A table whose cells each carry a shape.
    Table(Table),
    /// A group of shapes, flattened one level by the host.
    Group(Group),
}

impl ShapeNode {
    /// Finds the first leaf shape with the given identifier in this node,
    /// looking into table cells and group members.
    pub fn shape_mut(&mut self, object_id: &str) -> Option<&mut Shape> {
        match self {
            ShapeNode::Shape(shape) => Some(shape).filter(|s| s.object_id == object_id),
            ShapeNode::Table(table) => table
                .cells_mut()
                .map(|cell| &mut cell.shape)
                .find(|s| s.object_id == object_id),
            ShapeNode::Group(group) => group
                .members
                .iter_mut()
                .find(|s| s.object_id == object_id),
        }
    }

    /// Returns the leaf shape at `origin` within this node, or `None` when the
    /// node is of another kind or has no shape at that position.
    pub fn shape_at_mut(&mut self, origin: &Origin) -> Option<&mut Shape> {
        match (self, origin) {
            (ShapeNode::Shape(shape), Origin::Slide) => Some(shape),
            (ShapeNode::Table(table), Origin::TableCell { row, column }) => {
                table.cell_mut(*row, *column).map(|cell| &mut cell.shape)
            }
            (ShapeNode::Group(group), Origin::GroupMember { group_id, index })
                if group.object_id == *group_id =>
            {
                group.members.get_mut(*index)
            }
            _ => None,
        }
    }
}
