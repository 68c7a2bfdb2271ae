use serde::{Deserialize, Serialize};

use crate::models::shape::Shape;

/// A group container.
///
/// The host reports every member of a group at once, sub-groups included, so
/// members are already flat and never contain further containers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Identifier of the group itself.
    pub object_id: String,

    #[serde(default)]
    pub members: Vec<Shape>,
}
