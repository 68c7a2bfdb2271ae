//! In-memory snapshot of a slide's shape tree.
//!
//! These types mirror what the host document model exposes for one slide:
//! geometry, text and text attributes of every shape, plus the two container
//! kinds (tables and groups). They deserialize from a camelCase JSON snapshot.

pub mod colors;
pub mod common;
pub mod elements;
pub mod group;
pub mod properties;
pub mod shape;
pub mod slide;
pub mod table;
