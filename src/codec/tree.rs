//! Tree markup (JSON) helpers
//!
//! Pretty printing for human-readable save files and lenient parsing for
//! reading them back.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use super::CodecError;

/// Serialize with two-space indentation
pub fn to_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, CodecError> {
    serde_json::to_string_pretty(value).map_err(CodecError::Json)
}

/// Serialize with `indent` spaces per level
pub fn to_pretty_indent<T: Serialize + ?Sized>(value: &T, indent: usize) -> Result<String, CodecError> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser).map_err(CodecError::Json)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Parse the first JSON value in `text`, ignoring a byte-order mark,
/// surrounding whitespace and anything after the value.
pub fn parse_lenient(text: &str) -> Result<Value, CodecError> {
    let text = text.trim_start_matches('\u{feff}').trim();
    let mut stream = serde_json::Deserializer::from_str(text).into_iter::<Value>();
    match stream.next() {
        Some(Ok(value)) => {
            if stream.byte_offset() < text.len() {
                log::debug!("Ignoring {} trailing bytes after JSON value", text.len() - stream.byte_offset());
            }
            Ok(value)
        }
        Some(Err(e)) => Err(CodecError::Json(e)),
        None => Err(CodecError::Empty),
    }
}

/// Parse leniently and require a JSON object
pub fn parse_object(text: &str) -> Result<Map<String, Value>, CodecError> {
    match parse_lenient(text)? {
        Value::Object(map) => Ok(map),
        _ => Err(CodecError::NotAnObject),
    }
}

/// Read `key` as a `u64`. Numeric strings are accepted, and negative
/// integers keep their two's-complement bit pattern.
pub fn u64_field(object: &Map<String, Value>, key: &str) -> Result<Option<u64>, CodecError> {
    let Some(value) = object.get(key) else {
        return Ok(None);
    };
    let parsed = match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_i64().map(|i| i as u64)),
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .ok()
            .or_else(|| s.trim().parse::<i64>().ok().map(|i| i as u64)),
        _ => None,
    };
    parsed.map(Some).ok_or_else(|| invalid(key, value))
}

/// Read `key` as a `u32`, accepting numeric strings
pub fn u32_field(object: &Map<String, Value>, key: &str) -> Result<Option<u32>, CodecError> {
    let Some(value) = object.get(key) else {
        return Ok(None);
    };
    let parsed = match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    parsed.map(Some).ok_or_else(|| invalid(key, value))
}

/// Read `key` as an `i32`, truncating fractional numbers
pub fn i32_field(object: &Map<String, Value>, key: &str) -> Result<Option<i32>, CodecError> {
    let Some(value) = object.get(key) else {
        return Ok(None);
    };
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .or_else(|| n.as_f64().map(|f| f as i32)),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    };
    parsed.map(Some).ok_or_else(|| invalid(key, value))
}

/// Read `key` as a string
pub fn str_field<'a>(object: &'a Map<String, Value>, key: &str) -> Result<Option<&'a str>, CodecError> {
    match object.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(invalid(key, other)),
    }
}

fn invalid(key: &str, value: &Value) -> CodecError {
    CodecError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}
