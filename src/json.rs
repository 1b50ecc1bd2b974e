//! Conversion between [`Value`] and [`serde_json::Value`].
//!
//! This is glue for the CLI and for tests that want to build trees from a
//! JSON literal — it is not a JSON *parser*; text parsing is delegated
//! entirely to `serde_json`, matching the "JSON text parsing" Non-goal.
//!
//! `Bytes` has no native JSON representation, so it round-trips through a
//! base64-less hex string tagged with a `$bytes` wrapper object; this is a
//! CLI-convenience convention, not part of the wire format.

use serde_json::{Map, Number};

use crate::value::{Object, Value};

const BYTES_WRAPPER_KEY: &str = "$bytes";

/// Converts a `Value` into a `serde_json::Value` for CLI output.
pub fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Integer(v) => serde_json::Value::Number(Number::from(*v)),
        Value::Real(v) => Number::from_f64(*v)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Bytes(b) => {
            let mut map = Map::new();
            map.insert(BYTES_WRAPPER_KEY.to_string(), serde_json::Value::String(hex_encode(b)));
            serde_json::Value::Object(map)
        }
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Object(obj) => {
            let mut map = Map::new();
            for (k, v) in obj.iter() {
                map.insert(k.to_string(), to_json(v));
            }
            serde_json::Value::Object(map)
        }
    }
}

/// Converts a `serde_json::Value` into a `Value` tree for CLI input.
///
/// Returns `None` for JSON numbers that fit neither `i64` nor `f64`
/// (`serde_json`'s `arbitrary_precision` feature is not enabled, so this
/// should not occur in practice).
pub fn from_json(value: &serde_json::Value) -> Option<Value> {
    Some(match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else {
                Value::Real(n.as_f64()?)
            }
        }
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => {
            Value::Array(items.iter().map(from_json).collect::<Option<Vec<_>>>()?)
        }
        serde_json::Value::Object(map) => {
            if map.len() == 1 {
                if let Some(serde_json::Value::String(hex)) = map.get(BYTES_WRAPPER_KEY) {
                    return Some(Value::Bytes(hex_decode(hex)?));
                }
            }
            let mut obj = Object::with_capacity(map.len());
            for (k, v) in map {
                obj.insert(k.clone(), from_json(v)?);
            }
            Value::Object(obj)
        }
    })
}

fn hex_encode(data: &[u8]) -> String {
    let mut s = String::with_capacity(data.len() * 2);
    for b in data {
        s.push_str(&format!("{:02x}", b));
    }
    s
}

fn hex_decode(s: &str) -> Option<Vec<u8>> {
    if s.len() % 2 != 0 {
        return None;
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).ok())
        .collect()
}
