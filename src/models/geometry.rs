//! Points, rings and polygons decoded from GeoJSON coordinates.

use geo::{Coord, LineString};
use serde::{Deserialize, Serialize};

/// Geographic point (lat/lon). No CRS transform is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Re-encode in GeoJSON axis order, `[longitude, latitude]`.
    pub fn to_lon_lat(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(p: Point) -> Self {
        geo::Point::new(p.lon, p.lat)
    }
}

/// An ordered boundary of points.
///
/// The ring does not have to repeat its first point. Winding order is not
/// inspected.
#[derive(Debug, Clone)]
pub struct Ring {
    points: Vec<Point>,
    // Hole-free polygon over the same points; its exterior is always closed.
    shape: geo::Polygon<f64>,
}

impl Ring {
    pub fn new(points: Vec<Point>) -> Self {
        let coords: Vec<Coord<f64>> = points
            .iter()
            .map(|p| Coord { x: p.lon, y: p.lat })
            .collect();
        let shape = geo::Polygon::new(LineString::new(coords), vec![]);
        Self { points, shape }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Ray-casting (even-odd) containment test against this ring alone.
    ///
    /// Casts a ray towards +longitude and counts edge crossings, so regions a
    /// self-intersecting ring covers twice are outside. Points exactly on an
    /// edge may land on either side. An empty ring contains nothing.
    pub fn contains(&self, point: &Point) -> bool {
        if self.points.is_empty() {
            return false;
        }

        let p = geo::Point::from(*point);
        let (px, py) = (p.x(), p.y());
        let mut inside = false;

        for edge in self.shape.exterior().lines() {
            let (a, b) = (edge.start, edge.end);
            if (a.y > py) != (b.y > py) {
                let x = a.x + (py - a.y) * (b.x - a.x) / (b.y - a.y);
                if px < x {
                    inside = !inside;
                }
            }
        }

        inside
    }

    /// Coordinates in GeoJSON order, as they appeared in the source document.
    pub fn to_lon_lat(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(Point::to_lon_lat).collect()
    }
}

/// A polygon with an outer ring and zero or more holes.
///
/// Holes are not checked to lie within the outer ring.
#[derive(Debug, Clone)]
pub struct WofPolygon {
    pub outer_ring: Ring,
    pub interior_rings: Vec<Ring>,
}

impl WofPolygon {
    pub fn new(outer_ring: Ring, interior_rings: Vec<Ring>) -> Self {
        Self {
            outer_ring,
            interior_rings,
        }
    }

    /// Total number of points across the outer ring and all holes
    pub fn count_points(&self) -> usize {
        self.outer_ring.len() + self.interior_rings.iter().map(Ring::len).sum::<usize>()
    }
}
