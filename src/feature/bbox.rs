//! Bounding rectangles, from an explicit `bbox` member or a ring scan.

use serde_json::Value;
use tracing::warn;

use crate::config::ScanSeed;
use crate::error::{Error, Result};
use crate::models::{BoundingRect, Ring};

/// Build a rectangle from `[swlon, swlat, nelon, nelat]`.
///
/// A missing member or anything other than a 4-element array of numbers is
/// rejected. Corner ordering is trusted, not checked.
pub fn from_bbox(bbox: Option<&Value>) -> Result<BoundingRect> {
    let elements: &[Value] = match bbox {
        Some(Value::Array(elements)) => elements.as_slice(),
        _ => &[],
    };

    if elements.len() != 4 {
        warn!("Rejecting bounding box with {} elements", elements.len());
        return Err(Error::InvalidBoundingBox {
            len: elements.len(),
        });
    }

    let mut corners = [0.0; 4];
    for (index, (slot, value)) in corners.iter_mut().zip(elements).enumerate() {
        *slot = value
            .as_f64()
            .ok_or(Error::InvalidBoundingBoxValue { index })?;
    }

    let [swlon, swlat, nelon, nelat] = corners;
    Ok(BoundingRect::from_corners(swlon, swlat, nelon, nelat))
}

/// Build a rectangle by scanning a ring's points.
///
/// With [`ScanSeed::Unbounded`] an empty ring has no rectangle.
pub fn from_ring(ring: &Ring, seed: ScanSeed) -> Option<BoundingRect> {
    match seed {
        ScanSeed::Unbounded => scan_unbounded(ring),
        ScanSeed::LegacyZero => Some(scan_legacy_zero(ring)),
    }
}

fn scan_unbounded(ring: &Ring) -> Option<BoundingRect> {
    if ring.is_empty() {
        return None;
    }

    let (mut swlat, mut swlon) = (f64::INFINITY, f64::INFINITY);
    let (mut nelat, mut nelon) = (f64::NEG_INFINITY, f64::NEG_INFINITY);

    for pt in ring.points() {
        swlat = swlat.min(pt.lat);
        swlon = swlon.min(pt.lon);
        nelat = nelat.max(pt.lat);
        nelon = nelon.max(pt.lon);
    }

    Some(BoundingRect::from_corners(swlon, swlat, nelon, nelat))
}

// 0.0 doubles as "not yet set", so a true extremum of 0.0 is overwritten
// by the next point.
fn scan_legacy_zero(ring: &Ring) -> BoundingRect {
    let (mut swlat, mut swlon, mut nelat, mut nelon) = (0.0, 0.0, 0.0, 0.0);

    for pt in ring.points() {
        if swlat == 0.0 || swlat > pt.lat {
            swlat = pt.lat;
        }
        if swlon == 0.0 || swlon > pt.lon {
            swlon = pt.lon;
        }
        if nelat == 0.0 || nelat < pt.lat {
            nelat = pt.lat;
        }
        if nelon == 0.0 || nelon < pt.lon {
            nelon = pt.lon;
        }
    }

    BoundingRect::from_corners(swlon, swlat, nelon, nelat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;
    use serde_json::json;

    fn ring(points: &[(f64, f64)]) -> Ring {
        Ring::new(points.iter().map(|&(lat, lon)| Point::new(lat, lon)).collect())
    }

    fn assert_close(a: [f64; 2], b: [f64; 2]) {
        assert!((a[0] - b[0]).abs() < 1e-9 && (a[1] - b[1]).abs() < 1e-9, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_from_bbox() {
        let rect = from_bbox(Some(&json!([-73.6, 45.5, -73.5, 45.6]))).unwrap();
        assert_eq!(rect.origin, [-73.6, 45.5]);
        assert_close(rect.size, [0.1, 0.1]);
    }

    #[test]
    fn test_from_bbox_integers() {
        let rect = from_bbox(Some(&json!([0, 0, 10, 5]))).unwrap();
        assert_eq!(rect.origin, [0.0, 0.0]);
        assert_eq!(rect.size, [10.0, 5.0]);
    }

    #[test]
    fn test_from_bbox_wrong_length() {
        for bbox in [json!([]), json!([1.0]), json!([1.0, 2.0, 3.0]), json!([1, 2, 3, 4, 5])] {
            let expected = bbox.as_array().unwrap().len();
            match from_bbox(Some(&bbox)) {
                Err(Error::InvalidBoundingBox { len }) => assert_eq!(len, expected),
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn test_from_bbox_missing_or_not_array() {
        assert!(matches!(
            from_bbox(None),
            Err(Error::InvalidBoundingBox { len: 0 })
        ));
        assert!(matches!(
            from_bbox(Some(&json!("1,2,3,4"))),
            Err(Error::InvalidBoundingBox { len: 0 })
        ));
    }

    #[test]
    fn test_from_bbox_non_numeric() {
        assert!(matches!(
            from_bbox(Some(&json!([1.0, 2.0, "3", 4.0]))),
            Err(Error::InvalidBoundingBoxValue { index: 2 })
        ));
    }

    #[test]
    fn test_scan_unbounded() {
        let r = ring(&[(45.5, -73.6), (45.6, -73.6), (45.6, -73.5), (45.5, -73.5)]);
        let rect = from_ring(&r, ScanSeed::Unbounded).unwrap();
        assert_eq!(rect.min(), [-73.6, 45.5]);
        assert_close(rect.max(), [-73.5, 45.6]);
    }

    #[test]
    fn test_scan_crossing_zero() {
        // Straddles both the equator and the prime meridian
        let r = ring(&[(-1.0, -2.0), (-1.0, 2.0), (1.0, 2.0), (1.0, -2.0)]);

        let fixed = from_ring(&r, ScanSeed::Unbounded).unwrap();
        assert_eq!(fixed.min(), [-2.0, -1.0]);
        assert_eq!(fixed.max(), [2.0, 1.0]);

        let legacy = from_ring(&r, ScanSeed::LegacyZero).unwrap();
        assert_eq!(legacy.min(), [-2.0, -1.0]);
        assert_eq!(legacy.max(), [2.0, 1.0]);
    }

    #[test]
    fn test_scan_zero_extremum() {
        // True south-west corner is exactly (0, 0)
        let r = ring(&[(0.0, 0.0), (0.0, 5.0), (5.0, 5.0), (5.0, 0.0)]);

        let fixed = from_ring(&r, ScanSeed::Unbounded).unwrap();
        assert_eq!(fixed.min(), [0.0, 0.0]);
        assert_eq!(fixed.max(), [5.0, 5.0]);

        // The legacy seed loses the 0.0 latitude minimum to a later point
        let legacy = from_ring(&r, ScanSeed::LegacyZero).unwrap();
        assert_eq!(legacy.min(), [0.0, 5.0]);
        assert_eq!(legacy.max(), [5.0, 5.0]);
    }

    #[test]
    fn test_scan_empty_ring() {
        let r = ring(&[]);
        assert_eq!(from_ring(&r, ScanSeed::Unbounded), None);
        let legacy = from_ring(&r, ScanSeed::LegacyZero).unwrap();
        assert_eq!(legacy.origin, [0.0, 0.0]);
        assert_eq!(legacy.size, [0.0, 0.0]);
    }
}
