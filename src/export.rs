use std::path::Path;

use serde_json::Value;

use crate::error::{ConvertError, ConvertResult};

/// Read a watch-history export and return its top-level array elements.
pub fn load_export(path: &Path) -> ConvertResult<Vec<Value>> {
    let bytes = std::fs::read(path)?;
    parse_export(&bytes)
}

pub fn parse_export(bytes: &[u8]) -> ConvertResult<Vec<Value>> {
    match serde_json::from_slice::<Value>(bytes)? {
        Value::Array(entries) => Ok(entries),
        other => Err(ConvertError::NotAnArray(json_kind(&other))),
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
