//! Dynamic configuration values for module data bags.
//!
//! Module `data` tables are open key/value bags whose shape is only known to
//! the module reading them. Lookups go through [`crate::modules::Module::get_data`],
//! which falls back to a caller-supplied default whenever the stored value's
//! shape differs from the default's shape.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::mem;

/// A configuration value as it appears inside a module's `data` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    String(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Two values have the same shape when they carry the same variant.
    pub fn same_shape(&self, other: &Value) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}
