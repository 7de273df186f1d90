//! Attribute records evaluated against compiled rules

use std::fmt;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Mapping from attribute name to value
pub type Record = AHashMap<String, RecordValue>;

/// Scalar value stored in a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RecordValue {
    /// Numeric view of the value, used by the `>` and `<` operators
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RecordValue::Int(i) => Some(*i as f64),
            RecordValue::Float(f) => Some(*f),
            RecordValue::Text(_) => None,
        }
    }
}

// Canonical string form, used by the `=` operator. Equality is a straight
// string comparison against the raw rule literal, so "30" and "30.00" do
// not match.
impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordValue::Int(i) => write!(f, "{}", i),
            RecordValue::Float(v) => write!(f, "{}", v),
            RecordValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RecordValue {
    fn from(value: i64) -> Self {
        RecordValue::Int(value)
    }
}

impl From<i32> for RecordValue {
    fn from(value: i32) -> Self {
        RecordValue::Int(value as i64)
    }
}

impl From<f64> for RecordValue {
    fn from(value: f64) -> Self {
        RecordValue::Float(value)
    }
}

impl From<&str> for RecordValue {
    fn from(value: &str) -> Self {
        RecordValue::Text(value.to_string())
    }
}

impl From<String> for RecordValue {
    fn from(value: String) -> Self {
        RecordValue::Text(value)
    }
}

/// Build a record from (attribute, value) pairs
pub fn record_from<V: Into<RecordValue>>(pairs: Vec<(&str, V)>) -> Record {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.into()))
        .collect()
}
