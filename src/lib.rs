//! wof-spatial - spatial projections of Who's On First gazetteer records
//!
//! Decodes a single GeoJSON Feature into identity metadata, bounding
//! rectangles for a spatial index, and polygons with holes for exact
//! point-in-polygon queries.

pub mod config;
pub mod error;
pub mod feature;
pub mod models;
pub mod pip;

pub use config::{Config, ContainmentStrategy, ScanSeed};
pub use error::{Error, Result};
pub use feature::Feature;
pub use models::{BoundingRect, Point, Ring, SpatialRecord, WofPolygon};
