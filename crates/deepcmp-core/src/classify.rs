//! Type classification and type guards.
//!
//! [`classify`] assigns the coarse shape the dispatcher routes on.
//! [`host_type`] is the finer host-level primitive type: two values with
//! different host types are a type mismatch before any shape is considered.

use crate::value::Value;

/// Coarse shape category of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Absent,
    Null,
    Date,
    Regex,
    Sequence,
    Mapping,
    Primitive,
}

/// Host-level primitive type.
///
/// Null and every structured value (dates, regexes, arrays, mappings,
/// opaque objects) share the `Object` host type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostType {
    Undefined,
    Object,
    Boolean,
    Number,
    BigInt,
    String,
    Symbol,
}

impl HostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HostType::Undefined => "undefined",
            HostType::Object => "object",
            HostType::Boolean => "boolean",
            HostType::Number => "number",
            HostType::BigInt => "bigint",
            HostType::String => "string",
            HostType::Symbol => "symbol",
        }
    }
}

/// Classify a value. First matching rule wins: absent, null, date, regex,
/// sequence, mapping, then primitive.
pub fn classify(value: &Value) -> Classification {
    match value {
        Value::Undefined => Classification::Absent,
        Value::Null => Classification::Null,
        Value::Date(_) => Classification::Date,
        Value::Regex(_) => Classification::Regex,
        Value::Array(_) => Classification::Sequence,
        Value::Object(_) => Classification::Mapping,
        Value::Bool(_)
        | Value::Number(_)
        | Value::BigInt(_)
        | Value::String(_)
        | Value::Symbol(_)
        | Value::Opaque(_) => Classification::Primitive,
    }
}

/// Host-level primitive type of a value
pub fn host_type(value: &Value) -> HostType {
    match value {
        Value::Undefined => HostType::Undefined,
        Value::Bool(_) => HostType::Boolean,
        Value::Number(_) => HostType::Number,
        Value::BigInt(_) => HostType::BigInt,
        Value::String(_) => HostType::String,
        Value::Symbol(_) => HostType::Symbol,
        Value::Null
        | Value::Date(_)
        | Value::Regex(_)
        | Value::Array(_)
        | Value::Object(_)
        | Value::Opaque(_) => HostType::Object,
    }
}

pub fn is_undefined(value: &Value) -> bool {
    matches!(value, Value::Undefined)
}

pub fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

pub fn is_date(value: &Value) -> bool {
    matches!(value, Value::Date(_))
}

/// True for a date whose timestamp is a number
pub fn is_valid_date(value: &Value) -> bool {
    matches!(value, Value::Date(d) if d.is_valid())
}

pub fn is_regex(value: &Value) -> bool {
    matches!(value, Value::Regex(_))
}

/// True only for bare structural records (never arrays, dates or regexes)
pub fn is_plain_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Dedicated not-a-number predicate; `NaN == NaN` is false so equality
/// cannot be used for this.
pub fn is_nan_value(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_nan())
}

/// Type name used in messages
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Undefined => "undefined",
        Value::Array(_) => "array",
        v if is_date(v) => "Date",
        v if is_regex(v) => "RegExp",
        v if is_nan_value(v) => "NaN",
        v => host_type(v).as_str(),
    }
}
