//! Point-in-Polygon (PIP) containment for decomposed features.
//!
//! Evaluates containment over polygons with holes and provides fast
//! lookups across many places using an R-tree spatial index.

mod contains;
mod index;

pub use contains::{feature_contains, polygon_contains};
pub use index::{IndexedRecord, PlaceIndex};
