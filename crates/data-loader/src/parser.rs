//! Decoding of raw catalog JSON into `Movie` records.
//!
//! The catalog source is a JSON array of objects. Scalar fields are coerced
//! leniently at this boundary so the rest of the system only ever sees
//! `Option<String>` / `Option<f64>`:
//! - text fields accept strings and numbers (a title of `1776` is a title)
//! - score fields accept numbers and numeric strings
//! - `null`, a missing key, or an empty score string is absence

use crate::error::{DataLoadError, Result};
use crate::types::Movie;
use serde::de::{self, Deserialize, Deserializer, Unexpected};
use serde_json::Value;
use std::io::Read;

/// Decode a JSON array of movie records from a string.
///
/// `source` names the input in error messages (a file path, "<stdin>", ...).
pub fn parse_movies_str(json: &str, source: &str) -> Result<Vec<Movie>> {
    serde_json::from_str(json).map_err(|err| DataLoadError::from_json(source, err))
}

/// Decode a JSON array of movie records from any reader.
pub fn parse_movies_reader<R: Read>(reader: R, source: &str) -> Result<Vec<Movie>> {
    serde_json::from_reader(reader).map_err(|err| DataLoadError::from_json(source, err))
}

pub(crate) fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::invalid_type(
            unexpected(&other),
            &"a string, a number or null",
        )),
    }
}

pub(crate) fn lenient_score<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("score {} is out of range", n))),
        Some(Value::String(s)) => parse_score_str(&s).map_err(de::Error::custom),
        Some(other) => Err(de::Error::invalid_type(
            unexpected(&other),
            &"a number, a numeric string or null",
        )),
    }
}

fn parse_score_str(s: &str) -> std::result::Result<Option<f64>, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        // "NaN" and "inf" parse fine but can never be compared sensibly
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(format!("invalid score: {:?}", s)),
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}
