//! Document value model for job property lists
//!
//! A decoded document is a dictionary of string keys to values drawn from a
//! closed set of kinds: boolean, integer, string, array, dictionary. There is
//! no null and no float; a serialized document containing either fails at the
//! decode seam, never inside the validation engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Nested mapping type used for documents and sub-dictionaries.
///
/// Key iteration order is deterministic, so validation visits keys the same
/// way on every call.
pub type Dict = BTreeMap<String, Value>;

/// A single value in a decoded property list.
///
/// Booleans and integers are distinct variants: a rule expecting an integer
/// never sees `true` as `1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean
    Boolean(bool),
    /// 64-bit signed integer
    Integer(i64),
    /// UTF-8 string
    String(String),
    /// Array of values
    Array(Vec<Value>),
    /// Nested dictionary
    Dict(Dict),
}

impl Value {
    /// Returns the kind discriminant for this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Integer(_) => ValueKind::Integer,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Dict(_) => ValueKind::Dict,
        }
    }

    /// Returns the kind name for error messages.
    pub fn type_name(&self) -> &'static str {
        self.kind().type_name()
    }

    /// Returns the boolean if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is an integer value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is an array value.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the dictionary if this is a dictionary value.
    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Dict> for Value {
    fn from(dict: Dict) -> Self {
        Value::Dict(dict)
    }
}

/// Kind discriminants for [`Value`], used by type rules and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Boolean
    Boolean,
    /// 64-bit signed integer
    Integer,
    /// UTF-8 string
    String,
    /// Array of values
    Array,
    /// Nested dictionary
    Dict,
}

impl ValueKind {
    /// Returns the kind name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Dict => "dictionary",
        }
    }
}
