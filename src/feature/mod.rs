//! A single gazetteer feature document and the projections derived from it.
//!
//! The document is held as a generic JSON tree and queried by dotted path,
//! e.g. `properties.wof:id`. Everything derived from it (identity, bounding
//! rectangles, polygons) is computed on demand and never written back.

pub mod assemble;
pub mod bbox;
pub mod decompose;
pub mod metadata;

use serde_json::Value;

use crate::config::{Config, ContainmentStrategy, ScanSeed};
use crate::error::Result;
use crate::models::{Point, SpatialRecord, WofPolygon};

const WOF_ID: &str = "properties.wof:id";
const WOF_NAME: &str = "properties.wof:name";
const WOF_PLACETYPE: &str = "properties.wof:placetype";

/// One parsed GeoJSON Feature
#[derive(Debug, Clone)]
pub struct Feature {
    body: Value,
}

impl Feature {
    /// Parse a feature from raw bytes
    pub fn from_slice(raw: &[u8]) -> Result<Self> {
        let body = serde_json::from_slice(raw)?;
        Ok(Self { body })
    }

    pub fn from_value(body: Value) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Compact JSON rendering of the document
    pub fn dumps(&self) -> String {
        self.body.to_string()
    }

    /// Look up a value by dotted path.
    ///
    /// Each segment is an object key; colons are part of the key.
    pub fn path(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.body, |node, key| node.as_object()?.get(key))
    }

    pub fn string_value(&self, path: &str) -> Option<&str> {
        self.path(path).and_then(Value::as_str)
    }

    /// String value of `properties.<prop>`
    pub fn string_property(&self, prop: &str) -> Option<&str> {
        self.string_value(&format!("properties.{}", prop))
    }

    /// Top-level GeoJSON `id`
    pub fn id(&self) -> i64 {
        metadata::extract_id(self, "id")
    }

    pub fn wof_id(&self) -> i64 {
        metadata::extract_id(self, WOF_ID)
    }

    pub fn name(&self, path: &str) -> String {
        metadata::extract_name(self, path)
    }

    pub fn wof_name(&self) -> String {
        metadata::extract_name(self, WOF_NAME)
    }

    pub fn placetype(&self, path: &str) -> String {
        metadata::extract_placetype(self, path)
    }

    pub fn wof_placetype(&self) -> String {
        metadata::extract_placetype(self, WOF_PLACETYPE)
    }

    /// Decompose the geometry into polygons with holes
    pub fn polygons(&self) -> Result<Vec<WofPolygon>> {
        decompose::decompose(self)
    }

    /// Whether any polygon of this feature contains the point
    pub fn contains(&self, latitude: f64, longitude: f64) -> Result<bool> {
        self.contains_with(latitude, longitude, ContainmentStrategy::default())
    }

    /// Like [`Feature::contains`] with an explicit containment strategy
    pub fn contains_with(
        &self,
        latitude: f64,
        longitude: f64,
        strategy: ContainmentStrategy,
    ) -> Result<bool> {
        let polygons = self.polygons()?;
        Ok(crate::pip::feature_contains(
            &polygons,
            &Point::new(latitude, longitude),
            strategy,
        ))
    }

    /// One record for the whole feature, bounded by its `bbox` member
    pub fn en_spatialize(&self) -> Result<SpatialRecord> {
        assemble::en_spatialize(self, &Config::default())
    }

    /// One record per polygon, bounded by a scan of its outer ring
    pub fn en_spatialize_geom(&self) -> Result<Vec<SpatialRecord>> {
        assemble::en_spatialize_geom(self, &Config::default())
    }

    /// Like [`Feature::en_spatialize_geom`] with an explicit scan seed
    pub fn en_spatialize_geom_with(&self, seed: ScanSeed) -> Result<Vec<SpatialRecord>> {
        let mut config = Config::default();
        config.bbox.scan_seed = seed;
        assemble::en_spatialize_geom(self, &config)
    }
}
