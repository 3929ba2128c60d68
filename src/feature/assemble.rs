//! Spatial record assembly: identity plus bounding rectangle.

use tracing::debug;

use super::{bbox, decompose, metadata, Feature};
use crate::config::Config;
use crate::error::Result;
use crate::models::{SpatialRecord, WofPolygon};

struct Identity {
    id: i64,
    name: String,
    placetype: String,
}

fn identity(feature: &Feature, config: &Config) -> Identity {
    let paths = &config.properties;
    Identity {
        id: metadata::extract_id(feature, &paths.id),
        name: metadata::extract_name(feature, &paths.name),
        placetype: metadata::extract_placetype(feature, &paths.placetype),
    }
}

/// Single record for the whole feature, bounded by its `bbox` member.
pub fn en_spatialize(feature: &Feature, config: &Config) -> Result<SpatialRecord> {
    let bounds = bbox::from_bbox(feature.path("bbox"))?;
    let Identity { id, name, placetype } = identity(feature, config);

    Ok(SpatialRecord {
        bounds,
        id,
        name,
        placetype,
        offset: SpatialRecord::WHOLE_FEATURE,
    })
}

/// One record per decomposed polygon, bounded by a scan of its outer ring.
pub fn en_spatialize_geom(feature: &Feature, config: &Config) -> Result<Vec<SpatialRecord>> {
    let polygons = decompose::decompose(feature)?;
    Ok(en_spatialize_polygons(feature, &polygons, config))
}

/// Records for already-decomposed polygons of `feature`.
///
/// `offset` is the polygon's position in `polygons`. Polygons whose outer
/// ring yields no rectangle are skipped, so offsets may have gaps.
pub fn en_spatialize_polygons(
    feature: &Feature,
    polygons: &[WofPolygon],
    config: &Config,
) -> Vec<SpatialRecord> {
    let identity = identity(feature, config);
    let mut records = Vec::with_capacity(polygons.len());

    for (offset, polygon) in polygons.iter().enumerate() {
        let Some(bounds) = bbox::from_ring(&polygon.outer_ring, config.bbox.scan_seed) else {
            debug!(
                "Skipping polygon {} of place {}: empty outer ring",
                offset, identity.id
            );
            continue;
        };

        records.push(SpatialRecord {
            bounds,
            id: identity.id,
            name: identity.name.clone(),
            placetype: identity.placetype.clone(),
            offset: offset as i64,
        });
    }

    records
}
