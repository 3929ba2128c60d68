//! Point-in-polygon containment over polygons with holes.
//!
//! Hole tests (within one polygon) and polygon tests (across a feature) run
//! as parallel tasks on the rayon pool. Each task only reads its own ring
//! and the query point. Results are combined by reduction after the tasks
//! finish, never through a shared mutable flag.

use rayon::prelude::*;

use crate::config::ContainmentStrategy;
use crate::models::{Point, Ring, WofPolygon};

/// Whether `point` is inside the outer ring and outside every hole.
pub fn polygon_contains(
    polygon: &WofPolygon,
    point: &Point,
    strategy: ContainmentStrategy,
) -> bool {
    if !polygon.outer_ring.contains(point) {
        return false;
    }

    if polygon.interior_rings.is_empty() {
        return true;
    }

    !any_ring_contains(&polygon.interior_rings, point, strategy)
}

/// Whether any polygon of a decomposed feature contains `point`.
///
/// An empty list contains nothing.
pub fn feature_contains(
    polygons: &[WofPolygon],
    point: &Point,
    strategy: ContainmentStrategy,
) -> bool {
    match strategy {
        ContainmentStrategy::ShortCircuit => polygons
            .par_iter()
            .any(|polygon| polygon_contains(polygon, point, strategy)),
        ContainmentStrategy::Exhaustive => polygons
            .par_iter()
            .map(|polygon| polygon_contains(polygon, point, strategy))
            .collect::<Vec<bool>>()
            .contains(&true),
    }
}

fn any_ring_contains(rings: &[Ring], point: &Point, strategy: ContainmentStrategy) -> bool {
    match strategy {
        ContainmentStrategy::ShortCircuit => rings.par_iter().any(|ring| ring.contains(point)),
        ContainmentStrategy::Exhaustive => rings
            .par_iter()
            .map(|ring| ring.contains(point))
            .collect::<Vec<bool>>()
            .contains(&true),
    }
}
