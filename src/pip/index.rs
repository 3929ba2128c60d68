//! Spatial index for fast place lookups.

use rstar::{RTree, RTreeObject, AABB};
use std::sync::Arc;
use tracing::info;

use super::{feature_contains, polygon_contains};
use crate::config::{Config, ContainmentStrategy};
use crate::error::Result;
use crate::feature::{assemble, decompose, Feature};
use crate::models::{Point, SpatialRecord, WofPolygon};

/// Wrapper for R-tree indexing of spatial records
#[derive(Clone)]
pub struct IndexedRecord {
    pub record: SpatialRecord,
    polygons: Arc<Vec<WofPolygon>>,
}

impl RTreeObject for IndexedRecord {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.record.envelope()
    }
}

impl IndexedRecord {
    /// Exact containment for the part of the feature this record covers
    fn contains(&self, point: &Point, strategy: ContainmentStrategy) -> bool {
        match self.record.polygon_offset() {
            Some(offset) => self
                .polygons
                .get(offset)
                .is_some_and(|polygon| polygon_contains(polygon, point, strategy)),
            None => feature_contains(&self.polygons, point, strategy),
        }
    }
}

/// Spatial index of places, one entry per polygon, using an R-tree
pub struct PlaceIndex {
    tree: RTree<IndexedRecord>,
    strategy: ContainmentStrategy,
}

impl PlaceIndex {
    /// Build the index from decoded features.
    ///
    /// Fails on the first feature with malformed geometry. Features without
    /// polygonal geometry contribute no entries.
    pub fn build(features: &[Feature], config: &Config) -> Result<Self> {
        info!("Building spatial index for {} features...", features.len());

        let mut indexed = Vec::new();

        for feature in features {
            let polygons = Arc::new(decompose::decompose(feature)?);
            for record in assemble::en_spatialize_polygons(feature, &polygons, config) {
                indexed.push(IndexedRecord {
                    record,
                    polygons: Arc::clone(&polygons),
                });
            }
        }

        let tree = RTree::bulk_load(indexed);

        info!("Spatial index built with {} entries", tree.size());

        Ok(Self {
            tree,
            strategy: config.containment.strategy,
        })
    }

    /// Find all records whose polygon contains a point
    pub fn lookup(&self, lat: f64, lon: f64) -> Vec<&SpatialRecord> {
        let point = Point::new(lat, lon);
        let query_envelope = AABB::from_point([lon, lat]);

        // R-tree candidates via envelope intersection, then exact containment
        self.tree
            .locate_in_envelope_intersecting(&query_envelope)
            .filter(|ir| ir.contains(&point, self.strategy))
            .map(|ir| &ir.record)
            .collect()
    }

    /// Get total number of indexed records
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Iterate over all indexed records
    pub fn records(&self) -> impl Iterator<Item = &SpatialRecord> {
        self.tree.iter().map(|ir| &ir.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn square(min: f64, max: f64) -> serde_json::Value {
        json!([[min, min], [min, max], [max, max], [max, min], [min, min]])
    }

    fn features() -> Vec<Feature> {
        vec![
            Feature::from_value(json!({
                "properties": { "wof:id": 1, "wof:name": "Donut", "wof:placetype": "region" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [square(0.0, 10.0), square(3.0, 7.0)]
                }
            })),
            Feature::from_value(json!({
                "properties": { "wof:id": 2, "wof:name": "Islands", "wof:placetype": "county" },
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [[square(4.0, 6.0)], [square(20.0, 30.0)]]
                }
            })),
            Feature::from_value(json!({
                "properties": { "wof:id": 3 },
                "geometry": { "type": "Point", "coordinates": [5.0, 5.0] }
            })),
        ]
    }

    fn ids(records: Vec<&SpatialRecord>) -> Vec<i64> {
        let mut ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        ids.sort();
        ids
    }

    #[test]
    fn test_empty_index() {
        let index = PlaceIndex::build(&[], &Config::default()).unwrap();
        assert!(index.is_empty());
        assert!(index.lookup(5.0, 5.0).is_empty());
    }

    #[test]
    fn test_build_counts_polygons() {
        let index = PlaceIndex::build(&features(), &Config::default()).unwrap();
        assert_eq!(index.len(), 3);
        assert!(index.records().all(|r| r.offset >= 0));
    }

    #[test]
    fn test_lookup_respects_holes() {
        let index = PlaceIndex::build(&features(), &Config::default()).unwrap();

        // Inside the donut hole, but inside the first island
        assert_eq!(ids(index.lookup(5.0, 5.0)), vec![2]);
        // Inside the donut ring only
        assert_eq!(ids(index.lookup(1.0, 1.0)), vec![1]);
        // Inside the hole, outside the island
        assert!(index.lookup(3.5, 3.5).is_empty());
        // Second island
        let hits = index.lookup(25.0, 25.0);
        assert_eq!(ids(hits.clone()), vec![2]);
        assert_eq!(hits[0].offset, 1);
        // Nowhere
        assert!(index.lookup(50.0, 50.0).is_empty());
    }

    #[test]
    fn test_lookup_exhaustive_strategy() {
        let config = Config::from_toml_str("[containment]\nstrategy = \"exhaustive\"").unwrap();
        let index = PlaceIndex::build(&features(), &config).unwrap();
        assert_eq!(ids(index.lookup(5.0, 5.0)), vec![2]);
        assert_eq!(ids(index.lookup(1.0, 1.0)), vec![1]);
    }

    #[test]
    fn test_build_rejects_malformed_geometry() {
        let broken = vec![Feature::from_value(json!({
            "geometry": { "type": "Polygon", "coordinates": [[["x", "y"]]] }
        }))];
        assert!(PlaceIndex::build(&broken, &Config::default()).is_err());
    }

    #[test]
    fn test_whole_feature_record_contains() {
        let features = features();
        let feature = &features[1];
        let polygons = Arc::new(feature.polygons().unwrap());
        let mut record = feature.en_spatialize_geom().unwrap().remove(0);
        record.offset = SpatialRecord::WHOLE_FEATURE;

        let ir = IndexedRecord { record, polygons };
        assert!(ir.contains(&Point::new(25.0, 25.0), ContainmentStrategy::ShortCircuit));
        assert!(ir.contains(&Point::new(5.0, 5.0), ContainmentStrategy::Exhaustive));
        assert!(!ir.contains(&Point::new(15.0, 15.0), ContainmentStrategy::ShortCircuit));
    }
}
