//! Lenient identity extraction.
//!
//! Gazetteer records in the wild carry ids as floats, integers or strings,
//! and sometimes not at all. None of that is an error here: every lookup
//! yields a value, falling back to a sentinel or a fixed default.

use serde_json::Value;

use super::Feature;

/// Id returned when no coercion succeeds.
pub const UNKNOWN_ID: i64 = -1;
pub const DEFAULT_NAME: &str = "A Place With No Name";
pub const DEFAULT_PLACETYPE: &str = "unknown";

/// The shapes an id field is accepted in.
#[derive(Debug, Clone, PartialEq)]
pub enum IdValue {
    Number(f64),
    Integer(i64),
    Text(String),
    Absent,
}

impl IdValue {
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Number(n)) => match n.as_i64() {
                Some(i) => IdValue::Integer(i),
                None => n.as_f64().map_or(IdValue::Absent, IdValue::Number),
            },
            Some(Value::String(s)) => IdValue::Text(s.clone()),
            _ => IdValue::Absent,
        }
    }

    /// Coerce to an id, or [`UNKNOWN_ID`].
    ///
    /// Floats truncate toward zero and must fit in an `i64`; text must be a
    /// plain base-10 integer.
    pub fn coerce(&self) -> i64 {
        match self {
            IdValue::Number(f) if (i64::MIN as f64..i64::MAX as f64).contains(f) => {
                f.trunc() as i64
            }
            IdValue::Integer(i) => *i,
            IdValue::Text(s) => s.parse::<i64>().unwrap_or(UNKNOWN_ID),
            _ => UNKNOWN_ID,
        }
    }
}

pub fn extract_id(feature: &Feature, path: &str) -> i64 {
    IdValue::from_json(feature.path(path)).coerce()
}

pub fn extract_name(feature: &Feature, path: &str) -> String {
    feature
        .string_value(path)
        .unwrap_or(DEFAULT_NAME)
        .to_string()
}

pub fn extract_placetype(feature: &Feature, path: &str) -> String {
    feature
        .string_value(path)
        .unwrap_or(DEFAULT_PLACETYPE)
        .to_string()
}
