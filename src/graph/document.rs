//! Path lookups over schema-less manifest documents
//!
//! Every read of a resource document goes through these helpers. A missing key,
//! or a scalar where a mapping was expected, yields `None` instead of an error.

use serde_json::{Map, Value};

/// Walk `path` through nested mappings and return the value at the end
///
/// An empty path returns the document itself.
pub fn get<'a>(document: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(document, |current, key| current.as_object()?.get(*key))
}

/// Get a string field
pub fn get_str<'a>(document: &'a Value, path: &[&str]) -> Option<&'a str> {
    get(document, path).and_then(Value::as_str)
}

/// Get an integer field; floats and strings are treated as absent
pub fn get_i64(document: &Value, path: &[&str]) -> Option<i64> {
    get(document, path).and_then(Value::as_i64)
}

/// Get a mapping field
pub fn get_mapping<'a>(document: &'a Value, path: &[&str]) -> Option<&'a Map<String, Value>> {
    get(document, path).and_then(Value::as_object)
}

/// Get a sequence field
pub fn get_sequence<'a>(document: &'a Value, path: &[&str]) -> Option<&'a Vec<Value>> {
    get(document, path).and_then(Value::as_array)
}

/// Render a scalar the way it would appear as a label value
///
/// YAML happily produces `version: 2` or `canary: true`; labels are strings on
/// the API server, so both sides of a comparison go through this first.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
