//! Decoder configuration, loaded from TOML.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub properties: PropertyPaths,
    pub containment: ContainmentConfig,
    pub bbox: BboxConfig,
}

/// Dotted paths of the identity fields inside a feature document.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PropertyPaths {
    pub id: String,
    pub name: String,
    pub placetype: String,
}

impl Default for PropertyPaths {
    fn default() -> Self {
        Self {
            id: "properties.wof:id".to_string(),
            name: "properties.wof:name".to_string(),
            placetype: "properties.wof:placetype".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ContainmentConfig {
    pub strategy: ContainmentStrategy,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct BboxConfig {
    pub scan_seed: ScanSeed,
}

/// How hole and polygon sub-tests are aggregated.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContainmentStrategy {
    /// Stop scheduling sibling tests once one of them decides the answer.
    #[default]
    ShortCircuit,
    /// Run every sub-test to completion, then reduce the collected results.
    Exhaustive,
}

/// Seed values for the running min/max of a geometry scan.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScanSeed {
    /// Start from +/- infinity.
    #[default]
    Unbounded,
    /// Start from 0.0 and treat an exact 0.0 as "not yet set".
    ///
    /// Produces wrong rectangles for rings whose true extremum is 0.0 or
    /// that cross the prime meridian or the equator. Only useful to
    /// reproduce rectangles stored by older indexes.
    LegacyZero,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config file")?;
        Ok(config)
    }
}
