//! Scalar values used as record keys and filter operands.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A record's unique key value.
///
/// Keys are always sent to the provider in their string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchKey {
    Int(i64),
    String(String),
}

impl fmt::Display for SearchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchKey::Int(value) => write!(f, "{}", value),
            SearchKey::String(value) => f.write_str(value),
        }
    }
}

impl From<i64> for SearchKey {
    fn from(value: i64) -> Self {
        SearchKey::Int(value)
    }
}

impl From<i32> for SearchKey {
    fn from(value: i32) -> Self {
        SearchKey::Int(value.into())
    }
}

impl From<u32> for SearchKey {
    fn from(value: u32) -> Self {
        SearchKey::Int(value.into())
    }
}

impl From<String> for SearchKey {
    fn from(value: String) -> Self {
        SearchKey::String(value)
    }
}

impl From<&str> for SearchKey {
    fn from(value: &str) -> Self {
        SearchKey::String(value.to_string())
    }
}

/// Scalar operand of an equality or set-membership filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Bool(value) => write!(f, "{}", value),
            FilterValue::Int(value) => write!(f, "{}", value),
            FilterValue::Float(value) => write!(f, "{}", value),
            FilterValue::String(value) => f.write_str(value),
        }
    }
}

/// Parses command-line style operands: `true`/`false`, integers, floats,
/// and anything else as a string.
impl FromStr for FilterValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(value) = s.parse::<bool>() {
            return Ok(FilterValue::Bool(value));
        }
        if let Ok(value) = s.parse::<i64>() {
            return Ok(FilterValue::Int(value));
        }
        if let Ok(value) = s.parse::<f64>() {
            return Ok(FilterValue::Float(value));
        }
        Ok(FilterValue::String(s.to_string()))
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Int(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        FilterValue::Int(value.into())
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        FilterValue::Int(value.into())
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Float(value)
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::String(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::String(value.to_string())
    }
}
