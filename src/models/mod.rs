//! Core data models derived from a feature document.

pub mod geometry;
pub mod spatial;

pub use geometry::{Point, Ring, WofPolygon};
pub use spatial::{BoundingRect, SpatialRecord};
