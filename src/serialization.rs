use crate::ast::{Property, Value};
use serde::Serialize;
use std::collections::BTreeMap;

/// A generic, serde-serializable rendition of parsed script data, suitable
/// for JSON or YAML export.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlainValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Array(Vec<PlainValue>),
    Object(BTreeMap<String, PlainValue>),
}

pub(crate) fn to_plain(value: &Value) -> PlainValue {
    match value {
        Value::String(s) => PlainValue::String(s.clone()),
        Value::Integer(i) => PlainValue::Integer(*i),
        Value::Float(f) => PlainValue::Float(*f),
        Value::Boolean(b) => PlainValue::Boolean(*b),
        Value::Array(values) => PlainValue::Array(values.iter().map(to_plain).collect()),
        Value::Block(properties) => PlainValue::Object(block_to_plain(properties)),
    }
}

/// Duplicate keys collapse to the last occurrence; operators and property
/// order are not represented in the plain form.
pub(crate) fn block_to_plain(properties: &[Property]) -> BTreeMap<String, PlainValue> {
    let mut map = BTreeMap::new();
    for property in properties {
        map.insert(property.key.clone(), to_plain(&property.value));
    }
    map
}
