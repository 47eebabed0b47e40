//! Bound values carried alongside the rendered query text.
//!
//! `Value` is the closed set of things a parameter can hold: scalars, lists,
//! and string-keyed maps of further values. The same type doubles as the
//! payload of inline literals, which render directly into the query text
//! instead of surfacing in the parameter map.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::utils::{escape_identifier, escape_string_literal};

/// A scalar, list, or map value bound to a parameter or embedded as a literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    /// Map entries are kept sorted so literal rendering is deterministic.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Render this value as an inline Cypher literal.
    ///
    /// Strings are double-quoted with backslash escaping of embedded quotes
    /// and backslashes; map keys are backtick-escaped when they fall outside
    /// the safe identifier set.
    pub fn to_cypher(&self) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::String(s) => escape_string_literal(s),
            Value::List(items) => {
                let rendered: Vec<String> = items.iter().map(Value::to_cypher).collect();
                format!("[{}]", rendered.join(", "))
            }
            Value::Map(entries) => {
                if entries.is_empty() {
                    return "{}".to_string();
                }
                let rendered: Vec<String> = entries
                    .iter()
                    .map(|(key, value)| {
                        format!("{}: {}", escape_identifier(key), value.to_cypher())
                    })
                    .collect();
                format!("{{ {} }}", rendered.join(", "))
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(entries: BTreeMap<String, T>) -> Self {
        Value::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<Value>> From<HashMap<String, T>> for Value {
    fn from(entries: HashMap<String, T>) -> Self {
        Value::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}
