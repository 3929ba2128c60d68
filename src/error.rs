//! Error types for feature decoding.

use thiserror::Error;

/// Errors raised while turning a feature document into spatial records.
///
/// Missing or oddly typed identity fields are never errors; they fall back
/// to defaults (see [`crate::feature::metadata`]).
#[derive(Debug, Error)]
pub enum Error {
    /// The `bbox` member is not a 4-element array.
    #[error("invalid bounding box: expected 4 elements, found {len}")]
    InvalidBoundingBox { len: usize },

    /// A `bbox` element is not a number.
    #[error("invalid bounding box: element {index} is not a number")]
    InvalidBoundingBoxValue { index: usize },

    /// Coordinate nesting does not match the declared geometry type.
    #[error("malformed geometry: {0}")]
    MalformedGeometry(String),

    /// The input bytes are not a JSON document.
    #[error("failed to parse feature: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
