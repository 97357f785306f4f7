//! Line decoder: one raw JSONL line → [`Record`] or [`DecodeFailure`].

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// JSON field holding the resource identifier.
pub const URI_FIELD: &str = "uri";
/// JSON field holding the claimed digest (base-10 text).
pub const DIGEST_FIELD: &str = "digest";

/// One decoded line: an identifier and the digest claimed for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Opaque URI; hashed byte-for-byte as ASCII.
    pub identifier: String,
    /// Digest text exactly as found in the input. Doubles as the duplicate key.
    pub claimed_digest: String,
}

impl Record {
    pub fn new(identifier: impl Into<String>, claimed_digest: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            claimed_digest: claimed_digest.into(),
        }
    }
}

/// Why a line could not be turned into a [`Record`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeFailure {
    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(String),
    #[error("malformed JSON: {0}")]
    MalformedJson(String),
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
    #[error("missing field `{field}`")]
    MissingField { field: &'static str },
    #[error("field `{field}` must be a string, found {found}")]
    WrongType {
        field: &'static str,
        found: &'static str,
    },
}

/// Decode a raw line (terminator included or not).
pub fn decode(raw_line: &str) -> Result<Record, DecodeFailure> {
    let line = trim_line_terminator(raw_line);
    let value: Value =
        serde_json::from_str(line).map_err(|e| DecodeFailure::MalformedJson(e.to_string()))?;
    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(DecodeFailure::NotAnObject {
                found: json_type_name(&other),
            })
        }
    };
    let identifier = string_field(&map, URI_FIELD)?;
    let claimed_digest = string_field(&map, DIGEST_FIELD)?;
    Ok(Record {
        identifier,
        claimed_digest,
    })
}

/// Decode a raw line that has not yet been checked for UTF-8.
pub fn decode_bytes(raw_line: &[u8]) -> Result<Record, DecodeFailure> {
    let line =
        std::str::from_utf8(raw_line).map_err(|e| DecodeFailure::InvalidUtf8(e.to_string()))?;
    decode(line)
}

/// Strip trailing `\n` / `\r` characters.
pub fn trim_line_terminator(raw_line: &str) -> &str {
    raw_line.trim_end_matches(['\n', '\r'])
}

fn string_field(
    map: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<String, DecodeFailure> {
    match map.get(field) {
        None => Err(DecodeFailure::MissingField { field }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(DecodeFailure::WrongType {
            field,
            found: json_type_name(other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
