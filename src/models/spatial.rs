//! Index-ready records: a bounding rectangle plus place identity.

use rstar::{RTreeObject, AABB};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle anchored at its south-west corner.
///
/// Coordinates are `[longitude, latitude]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingRect {
    pub origin: [f64; 2],
    pub size: [f64; 2],
}

impl BoundingRect {
    pub fn new(origin: [f64; 2], size: [f64; 2]) -> Self {
        Self { origin, size }
    }

    /// Build from south-west and north-east corners
    pub fn from_corners(swlon: f64, swlat: f64, nelon: f64, nelat: f64) -> Self {
        Self::new([swlon, swlat], [nelon - swlon, nelat - swlat])
    }

    pub fn width(&self) -> f64 {
        self.size[0]
    }

    pub fn height(&self) -> f64 {
        self.size[1]
    }

    pub fn min(&self) -> [f64; 2] {
        self.origin
    }

    pub fn max(&self) -> [f64; 2] {
        [self.origin[0] + self.size[0], self.origin[1] + self.size[1]]
    }
}

/// Bounding rectangle plus the identity triple handed to a spatial index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialRecord {
    pub bounds: BoundingRect,
    pub id: i64,
    pub name: String,
    pub placetype: String,

    /// Index into the feature's decomposed polygons, or
    /// [`SpatialRecord::WHOLE_FEATURE`] when the rectangle covers the feature.
    pub offset: i64,
}

impl SpatialRecord {
    pub const WHOLE_FEATURE: i64 = -1;

    /// The polygon this record's rectangle was derived from, if any
    pub fn polygon_offset(&self) -> Option<usize> {
        usize::try_from(self.offset).ok()
    }
}

impl RTreeObject for SpatialRecord {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.bounds.min(), self.bounds.max())
    }
}
