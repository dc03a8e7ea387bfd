//! The runtime value model.
//!
//! Descriptors never inspect host types directly. Every candidate is first
//! carried as a [`Value`], a small sum type over the kinds the library can
//! check. JSON documents convert losslessly in both directions, with one
//! extension: datetimes are first-class here and become RFC 3339 strings on
//! the JSON side.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The kind of a [`Value`], without its payload.
///
/// Kind names are stable and appear verbatim in validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Datetime,
    List,
    Map,
}

impl Kind {
    /// Returns the lowercase kind name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Datetime => "datetime",
            Kind::List => "list",
            Kind::Map => "map",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A loosely typed value to be checked against a descriptor.
///
/// Maps are ordered by key so that iteration, display, and validation visit
/// entries in the same order on every run.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Datetime(DateTime<Utc>),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Reports which kind of value this is.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Boolean(_) => Kind::Boolean,
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::Datetime(_) => Kind::Datetime,
            Value::List(_) => Kind::List,
            Value::Map(_) => Kind::Map,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(inner) => Some(*inner),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(inner) => Some(*inner),
            _ => None,
        }
    }

    /// Returns the numeric payload. Integers promote, so any numeric value
    /// yields a float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(inner) => Some(*inner as f64),
            Value::Float(inner) => Some(*inner),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Datetime(inner) => Some(*inner),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Converts to a JSON value.
    ///
    /// Datetimes become RFC 3339 strings. Non-finite floats have no JSON
    /// representation and become null.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(inner) => serde_json::Value::Bool(*inner),
            Value::Integer(inner) => serde_json::Value::from(*inner),
            Value::Float(inner) => serde_json::Value::from(*inner),
            Value::String(inner) => serde_json::Value::String(inner.clone()),
            Value::Datetime(inner) => serde_json::Value::String(inner.to_rfc3339()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Map(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(key, item)| (key.clone(), item.to_json()))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(inner) => write!(f, "{inner}"),
            Value::Integer(inner) => write!(f, "{inner}"),
            Value::Float(inner) => write!(f, "{inner}"),
            Value::String(inner) => f.write_str(inner),
            Value::Datetime(inner) => f.write_str(&inner.to_rfc3339()),
            Value::List(items) => {
                f.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Map(entries) => {
                f.write_str("{")?;
                for (index, (key, item)) in entries.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {item}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(inner: bool) -> Self {
        Value::Boolean(inner)
    }
}

impl From<i32> for Value {
    fn from(inner: i32) -> Self {
        Value::Integer(i64::from(inner))
    }
}

impl From<i64> for Value {
    fn from(inner: i64) -> Self {
        Value::Integer(inner)
    }
}

impl From<f64> for Value {
    fn from(inner: f64) -> Self {
        Value::Float(inner)
    }
}

impl From<&str> for Value {
    fn from(inner: &str) -> Self {
        Value::String(inner.to_string())
    }
}

impl From<String> for Value {
    fn from(inner: String) -> Self {
        Value::String(inner)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(inner: DateTime<Utc>) -> Self {
        Value::Datetime(inner)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Value::Map(entries)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(inner) => Value::Boolean(inner),
            serde_json::Value::Number(number) => {
                if let Some(inner) = number.as_i64() {
                    Value::Integer(inner)
                } else {
                    // Outside i64: a float, or a u64 beyond i64::MAX. as_f64
                    // is total for standard JSON numbers.
                    Value::Float(number.as_f64().unwrap_or_default())
                }
            }
            serde_json::Value::String(inner) => Value::String(inner),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(key, item)| (key, Value::from(item)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        value.to_json()
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}
