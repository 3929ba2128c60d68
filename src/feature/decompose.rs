//! Geometry decomposition: `Polygon` / `MultiPolygon` coordinates to
//! [`WofPolygon`]s.
//!
//! Only the two polygonal GeoJSON types are supported. Any other type, or a
//! feature without geometry, decomposes to no polygons at all. Coordinates
//! that do not match the declared type are rejected rather than skipped.

use serde_json::Value;
use tracing::debug;

use super::Feature;
use crate::error::{Error, Result};
use crate::models::{Point, Ring, WofPolygon};

/// Geometry type, decided once from `geometry.type`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryKind {
    Polygon,
    MultiPolygon,
    Unsupported(String),
}

impl GeometryKind {
    pub fn from_type(geom_type: Option<&str>) -> Self {
        match geom_type {
            Some("Polygon") => GeometryKind::Polygon,
            Some("MultiPolygon") => GeometryKind::MultiPolygon,
            Some(other) => GeometryKind::Unsupported(other.to_string()),
            None => GeometryKind::Unsupported(String::new()),
        }
    }
}

/// Decompose a feature's geometry into polygons, in input order.
pub fn decompose(feature: &Feature) -> Result<Vec<WofPolygon>> {
    let kind = GeometryKind::from_type(feature.string_value("geometry.type"));

    let polygons = match kind {
        GeometryKind::Polygon => {
            let coordinates = coordinates(feature)?;
            vec![dump_polygon(coordinates, "coordinates")?]
        }
        GeometryKind::MultiPolygon => {
            let coordinates = coordinates(feature)?;
            dump_multi_polygon(coordinates)?
        }
        GeometryKind::Unsupported(geom_type) => {
            debug!("Unsupported geometry type {:?}, no polygons", geom_type);
            return Ok(Vec::new());
        }
    };

    debug!(
        "Decomposed geometry into {} polygons ({} points)",
        polygons.len(),
        polygons.iter().map(WofPolygon::count_points).sum::<usize>()
    );

    Ok(polygons)
}

fn coordinates(feature: &Feature) -> Result<&Value> {
    feature
        .path("geometry.coordinates")
        .ok_or_else(|| Error::MalformedGeometry("missing geometry.coordinates".to_string()))
}

fn as_array<'a>(value: &'a Value, at: &str) -> Result<&'a [Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| Error::MalformedGeometry(format!("expected an array at {}", at)))
}

fn dump_multi_polygon(coordinates: &Value) -> Result<Vec<WofPolygon>> {
    as_array(coordinates, "coordinates")?
        .iter()
        .enumerate()
        .map(|(i, group)| dump_polygon(group, &format!("coordinates[{}]", i)))
        .collect()
}

/// Ring 0 is the outer ring, the rest are holes.
fn dump_polygon(coordinates: &Value, at: &str) -> Result<WofPolygon> {
    let mut rings = as_array(coordinates, at)?
        .iter()
        .enumerate()
        .map(|(i, ring)| dump_ring(ring, &format!("{}[{}]", at, i)))
        .collect::<Result<Vec<Ring>>>()?;

    if rings.is_empty() {
        return Err(Error::MalformedGeometry(format!("no rings at {}", at)));
    }

    let outer_ring = rings.remove(0);
    Ok(WofPolygon::new(outer_ring, rings))
}

/// Positions are `[longitude, latitude, ...]`; extra ordinates are ignored.
fn dump_ring(ring: &Value, at: &str) -> Result<Ring> {
    let points = as_array(ring, at)?
        .iter()
        .enumerate()
        .map(|(i, position)| {
            let at = format!("{}[{}]", at, i);
            match as_array(position, &at)? {
                [lon, lat, ..] => match (lon.as_f64(), lat.as_f64()) {
                    (Some(lon), Some(lat)) => Ok(Point::new(lat, lon)),
                    _ => Err(Error::MalformedGeometry(format!(
                        "non-numeric ordinate at {}",
                        at
                    ))),
                },
                _ => Err(Error::MalformedGeometry(format!(
                    "position with fewer than 2 ordinates at {}",
                    at
                ))),
            }
        })
        .collect::<Result<Vec<Point>>>()?;

    Ok(Ring::new(points))
}
