//! JSON conversion boundary.
//!
//! Plain JSON maps directly onto [`Value`]. Values JSON cannot carry are
//! written as single-key tagged objects:
//!
//! | Tag | Payload | Value |
//! |---|---|---|
//! | `$undefined` | `true` | `Undefined` |
//! | `$date` | RFC 3339 / `YYYY-MM-DD` string, epoch millis, or `null` | `Date` (`null` or unparseable text is an invalid date) |
//! | `$regex` | `"/src/flags"` or `{"source", "flags"}` | `Regex` |
//! | `$number` | `"NaN"`, `"Infinity"`, `"-Infinity"` or a numeric string | `Number` |
//! | `$bigint` | integer string or integer | `BigInt` |
//! | `$symbol` | description | `Symbol` (fresh identity) |
//! | `$opaque` | class name | `Opaque` (fresh identity) |
//!
//! An object with any other shape, including unknown `$` keys, is an
//! ordinary mapping. Object key order is preserved.

use crate::errors::{DeepCmpError, ExError, Result};
use crate::path::{build_path, display_path};
use crate::value::{DateValue, RegexValue, Value};
use crate::{log_op_end, log_op_error, log_op_start};
use deepcmp_core_types::schema::OP_PARSE_JSON;
use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value as Json};
use std::path::Path;
use std::time::Instant;

pub const TAG_UNDEFINED: &str = "$undefined";
pub const TAG_DATE: &str = "$date";
pub const TAG_REGEX: &str = "$regex";
pub const TAG_NUMBER: &str = "$number";
pub const TAG_BIGINT: &str = "$bigint";
pub const TAG_SYMBOL: &str = "$symbol";
pub const TAG_OPAQUE: &str = "$opaque";

/// Parse JSON text into a comparable value
///
/// # Errors
///
/// - `Serialization`: the text is not valid JSON
/// - `InvalidInput` / `InvalidRegex`: a tagged value is malformed
pub fn parse_json_str(text: &str) -> Result<Value> {
    let json: Json = serde_json::from_str(text).map_err(|e| {
        tracing::debug!(error = %e, "json parse failed");
        ExError::from(DeepCmpError::Json {
            message: e.to_string(),
        })
    })?;
    from_json(&json)
}

/// Read a JSON file and convert it into a comparable value
///
/// # Errors
///
/// - `Io`: the file cannot be read
/// - any error of [`parse_json_str`]
pub fn read_json_file(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let file = path.display().to_string();
    log_op_start!(OP_PARSE_JSON, file = file.as_str());
    let start = Instant::now();

    let parsed = std::fs::read_to_string(path)
        .map_err(|e| {
            ExError::from(DeepCmpError::FileRead {
                path: file.clone(),
                message: e.to_string(),
            })
        })
        .and_then(|text| parse_json_str(&text));

    let duration_ms = start.elapsed().as_millis() as u64;
    match parsed {
        Ok(value) => {
            log_op_end!(OP_PARSE_JSON, duration_ms = duration_ms);
            Ok(value)
        }
        Err(err) => {
            log_op_error!(OP_PARSE_JSON, err.clone(), duration_ms = duration_ms);
            Err(err)
        }
    }
}

/// Convert a parsed JSON document into a comparable value
///
/// # Errors
///
/// - `InvalidInput`: a tagged object has the wrong payload type
/// - `InvalidRegex`: a `$regex` payload carries invalid flags
pub fn from_json(json: &Json) -> Result<Value> {
    convert(json, "")
}

fn convert(json: &Json, path: &str) -> Result<Value> {
    match json {
        Json::Null => Ok(Value::Null),
        Json::Bool(b) => Ok(Value::Bool(*b)),
        Json::Number(n) => n
            .as_f64()
            .map(Value::Number)
            .ok_or_else(|| malformed("number", path, "not representable as f64")),
        Json::String(s) => Ok(Value::String(s.clone())),
        Json::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| convert(item, &build_path(path, i)))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        Json::Object(map) => {
            if let Some(tagged) = convert_tagged(map, path)? {
                return Ok(tagged);
            }
            let mut out = crate::value::Mapping::with_capacity(map.len());
            for (key, item) in map {
                out.insert(key.clone(), convert(item, &build_path(path, key.as_str()))?);
            }
            Ok(Value::Object(out))
        }
    }
}

fn convert_tagged(map: &Map<String, Json>, path: &str) -> Result<Option<Value>> {
    if map.len() != 1 {
        return Ok(None);
    }
    let Some((tag, payload)) = map.iter().next() else {
        return Ok(None);
    };

    let value = match tag.as_str() {
        TAG_UNDEFINED => match payload {
            Json::Bool(true) => Value::Undefined,
            _ => return Err(malformed(tag, path, "expected `true`")),
        },
        TAG_DATE => match payload {
            Json::Null => Value::Date(DateValue::invalid()),
            Json::String(s) => Value::Date(DateValue::parse(s)),
            Json::Number(n) => match n.as_i64() {
                Some(ms) => Value::Date(DateValue::from_millis(ms)),
                // fractional millis truncate toward zero
                None => match n.as_f64() {
                    Some(f) if f.is_finite() => Value::Date(DateValue::from_millis(f.trunc() as i64)),
                    _ => Value::Date(DateValue::invalid()),
                },
            },
            _ => return Err(malformed(tag, path, "expected a string, number or null")),
        },
        TAG_REGEX => {
            let regex = match payload {
                Json::String(literal) => RegexValue::parse_literal(literal),
                Json::Object(parts) => {
                    let source = parts
                        .get("source")
                        .and_then(Json::as_str)
                        .ok_or_else(|| malformed(tag, path, "`source` must be a string"))?;
                    let flags = match parts.get("flags") {
                        None | Some(Json::Null) => "",
                        Some(Json::String(f)) => f.as_str(),
                        Some(_) => return Err(malformed(tag, path, "`flags` must be a string")),
                    };
                    RegexValue::new(source, flags)
                }
                _ => return Err(malformed(tag, path, "expected a literal or an object")),
            };
            Value::Regex(regex.map_err(|e| ExError::from(e).with_path(display_path(path)))?)
        }
        TAG_NUMBER => match payload {
            Json::String(s) => Value::Number(parse_number(s).ok_or_else(|| {
                malformed(tag, path, &format!("'{}' is not a number", s))
            })?),
            Json::Number(n) => n
                .as_f64()
                .map(Value::Number)
                .ok_or_else(|| malformed(tag, path, "not representable as f64"))?,
            _ => return Err(malformed(tag, path, "expected a string")),
        },
        TAG_BIGINT => {
            let literal = match payload {
                Json::String(s) => s.clone(),
                Json::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
                _ => return Err(malformed(tag, path, "expected an integer string")),
            };
            let parsed = literal.trim().parse::<i128>().map_err(|_| {
                ExError::from(DeepCmpError::InvalidBigInt {
                    literal: literal.clone(),
                })
                .with_path(display_path(path))
            })?;
            Value::BigInt(parsed)
        }
        TAG_SYMBOL => match payload {
            Json::String(s) => Value::symbol(s),
            _ => return Err(malformed(tag, path, "expected a description string")),
        },
        TAG_OPAQUE => match payload {
            Json::String(s) => Value::opaque(s),
            _ => return Err(malformed(tag, path, "expected a class name string")),
        },
        _ => return Ok(None),
    };
    Ok(Some(value))
}

fn parse_number(text: &str) -> Option<f64> {
    match text {
        "NaN" => Some(f64::NAN),
        "Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        other => other.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
    }
}

fn malformed(tag: &str, path: &str, reason: &str) -> ExError {
    DeepCmpError::MalformedTag {
        tag: tag.to_string(),
        path: display_path(path).to_string(),
        reason: reason.to_string(),
    }
    .into()
}

/// Render a comparable value as JSON, using the tagged encoding where plain
/// JSON cannot carry the value.
pub fn to_json(value: &Value) -> Json {
    match value {
        Value::Undefined => json!({ TAG_UNDEFINED: true }),
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Number(n) => number_to_json(*n),
        Value::BigInt(i) => json!({ TAG_BIGINT: i.to_string() }),
        Value::String(s) => Json::String(s.clone()),
        Value::Symbol(h) => json!({ TAG_SYMBOL: h.description() }),
        Value::Date(d) => json!({ TAG_DATE: d.to_iso_string() }),
        Value::Regex(r) => json!({ TAG_REGEX: r.to_string() }),
        Value::Array(items) => Json::Array(items.iter().map(to_json).collect()),
        Value::Object(map) => Json::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), to_json(v)))
                .collect(),
        ),
        Value::Opaque(h) => json!({ TAG_OPAQUE: h.description() }),
    }
}

fn number_to_json(n: f64) -> Json {
    if n.is_nan() {
        return json!({ TAG_NUMBER: "NaN" });
    }
    if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        return json!({ TAG_NUMBER: text });
    }
    // integral values print without a fractional part
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        return Json::from(n as i64);
    }
    serde_json::Number::from_f64(n)
        .map(Json::Number)
        .unwrap_or(Json::Null)
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        to_json(self).serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;
    use std::io::Write;

    #[test]
    fn test_read_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"when": {{"$date": "2025-01-01"}}}}"#).unwrap();
        let v = read_json_file(file.path()).unwrap();
        assert_eq!(
            v,
            Value::object([("when", Value::Date(DateValue::parse("2025-01-01")))])
        );
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_json_file(dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Io);
        assert_eq!(err.op(), Some("read_file"));
    }

    #[test]
    fn test_plain_json_maps_directly() {
        let v = parse_json_str(r#"{"b": [1, "x", null, true], "a": {}}"#).unwrap();
        let expected = Value::object([
            (
                "b",
                Value::array([
                    Value::from(1),
                    Value::from("x"),
                    Value::Null,
                    Value::Bool(true),
                ]),
            ),
            ("a", Value::Object(Default::default())),
        ]);
        assert_eq!(v, expected);
    }

    #[test]
    fn test_object_key_order_is_preserved() {
        let v = parse_json_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let Value::Object(map) = v else {
            panic!("expected object");
        };
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_tagged_values() {
        let v = parse_json_str(
            r#"[{"$undefined": true}, {"$date": "2025-01-01"}, {"$date": null},
                {"$regex": "/debug/g"}, {"$number": "NaN"}, {"$bigint": "12345678901234567890"}]"#,
        )
        .unwrap();
        let Value::Array(items) = v else {
            panic!("expected array");
        };
        assert_eq!(items[0], Value::Undefined);
        assert!(matches!(&items[1], Value::Date(d) if d.is_valid()));
        assert!(matches!(&items[2], Value::Date(d) if !d.is_valid()));
        assert!(matches!(&items[3], Value::Regex(r) if r.to_string() == "/debug/g"));
        assert!(matches!(&items[4], Value::Number(n) if n.is_nan()));
        assert_eq!(items[5], Value::BigInt(12_345_678_901_234_567_890));
    }

    #[test]
    fn test_regex_object_payload() {
        let v = parse_json_str(r#"{"$regex": {"source": "x", "flags": "ig"}}"#).unwrap();
        assert!(matches!(v, Value::Regex(r) if r.to_string() == "/x/gi"));
    }

    #[test]
    fn test_unknown_dollar_key_is_plain_object() {
        let v = parse_json_str(r#"{"$ref": "x"}"#).unwrap();
        assert!(matches!(v, Value::Object(_)));
    }

    #[test]
    fn test_multi_key_tag_is_plain_object() {
        let v = parse_json_str(r#"{"$date": "2025-01-01", "other": 1}"#).unwrap();
        assert!(matches!(v, Value::Object(_)));
    }

    #[test]
    fn test_malformed_tag_reports_path() {
        let err = parse_json_str(r#"{"a": [{"$undefined": 1}]}"#).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert_eq!(err.path(), Some("a[0]"));
    }

    #[test]
    fn test_bad_regex_flags_are_invalid_regex() {
        let err = parse_json_str(r#"{"r": {"$regex": "/x/zz"}}"#).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidRegex);
        assert_eq!(err.path(), Some("r"));
    }

    #[test]
    fn test_bad_bigint() {
        let err = parse_json_str(r#"{"$bigint": "1.5"}"#).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    }

    #[test]
    fn test_syntax_error_is_serialization() {
        let err = parse_json_str("{not json").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Serialization);
    }

    #[test]
    fn test_to_json_encodings() {
        assert_eq!(to_json(&Value::from(3)), json!(3));
        assert_eq!(to_json(&Value::from(1.5)), json!(1.5));
        assert_eq!(to_json(&Value::nan()), json!({"$number": "NaN"}));
        assert_eq!(to_json(&Value::Undefined), json!({"$undefined": true}));
        assert_eq!(
            to_json(&Value::Date(DateValue::invalid())),
            json!({"$date": null})
        );
        assert_eq!(to_json(&Value::BigInt(-7)), json!({"$bigint": "-7"}));
    }

    #[test]
    fn test_tagged_encoding_reparses() {
        let original = Value::object([
            ("when", Value::Date(DateValue::parse("2025-01-01T12:00:00Z"))),
            ("re", Value::Regex(RegexValue::new("a+", "gi").unwrap())),
            ("gone", Value::Undefined),
            ("inf", Value::Number(f64::NEG_INFINITY)),
        ]);
        let reparsed = from_json(&to_json(&original)).unwrap();
        assert_eq!(reparsed, original);
    }
}
