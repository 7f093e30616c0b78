//! JSON object transforms driven by `map_object`

use serde_json::{Map, Value};

use crate::collections::map_object;
use crate::error::{Error, Result};

/// How each `key: value` entry of an object is rewritten
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapTransform {
    /// `{k: v}` becomes `{v: k}`
    Swap,
    /// `{k: v}` becomes `{k: {field: v}}`
    Wrap(String),
}

/// Parse text as a JSON object
pub fn parse_object(text: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str(text)? {
        Value::Object(object) => Ok(object),
        other => Err(Error::NotAnObject(kind(&other))),
    }
}

/// Apply `transform` to every entry of `object`, producing a new object
pub fn apply(object: &Map<String, Value>, transform: &MapTransform) -> Result<Map<String, Value>> {
    match transform {
        MapTransform::Swap => swap(object),
        MapTransform::Wrap(field) => Ok(map_object(object, |(key, value)| {
            let mut wrapped = Map::new();
            wrapped.insert(field.clone(), value.clone());
            (key.clone(), Value::Object(wrapped))
        })),
    }
}

fn swap(object: &Map<String, Value>) -> Result<Map<String, Value>> {
    // Keys must be checked up front; the transform itself cannot fail
    for (key, value) in object {
        if key_text(value).is_none() {
            return Err(Error::UnusableKey {
                key: key.clone(),
                kind: kind(value),
            });
        }
    }

    let swapped: Map<String, Value> = map_object(object, |(key, value)| {
        (key_text(value).unwrap_or_default(), Value::String(key.clone()))
    });

    if swapped.len() < object.len() {
        let duplicate = first_duplicate(object.values().filter_map(key_text));
        return Err(Error::DuplicateKey(duplicate.unwrap_or_default()));
    }

    Ok(swapped)
}

/// Text form of a value that can stand in as an object key
fn key_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn first_duplicate(mut keys: impl Iterator<Item = String>) -> Option<String> {
    let mut seen = std::collections::HashSet::new();
    keys.find(|k| !seen.insert(k.clone()))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
