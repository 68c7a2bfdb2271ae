//! Converters from slide snapshots to output formats.

pub mod html;
