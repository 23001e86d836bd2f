// Author: Dustin Pilgrim
// License: MIT

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::ast::{Value, DATETIME_FORMAT};
use crate::config::{ConfigNode, Table};
use crate::TomlError;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::DateTime(dt) => serializer.collect_str(&dt.format(DATETIME_FORMAT)),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => serializer.collect_seq(items),
        }
    }
}

impl Serialize for ConfigNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ConfigNode::Value(value) => value.serialize(serializer),
            ConfigNode::Table(table) => table.serialize(serializer),
        }
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, node) in self {
            map.serialize_entry(key, node)?;
        }
        map.end()
    }
}

/// Export a parsed tree to pretty-printed JSON.
///
/// Key groups become objects in source order, datetimes become
/// `YYYY-MM-DDTHH:MM:SSZ` strings.
///
/// # Examples
/// ```
/// use toml_cfg::{export, parse};
///
/// let table = parse("[owner]\nname = \"Tom\"").unwrap();
/// let json = export::export_to_json(&table).unwrap();
/// assert!(json.contains("\"owner\""));
/// ```
pub fn export_to_json(table: &Table) -> Result<String, TomlError> {
    serde_json::to_string_pretty(table).map_err(|e| TomlError::RuntimeError {
        message: format!("Failed to export JSON: {}", e),
        hint: None,
        code: Some(501),
    })
}
