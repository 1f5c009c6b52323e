//! Comparable value model.
//!
//! [`Value`] is the canonical, host-independent form of everything the
//! comparison engine can walk. Absence and null are separate variants, so
//! "no value here" and "explicitly nothing" never collapse into one
//! nullable case.
//!
//! `Value` implements `PartialEq` as plain structural Rust equality (NaN is
//! unequal to itself, handles compare by identity). Use
//! [`crate::compare::compare`] for deep comparison with discrepancy
//! reporting.

use crate::errors::DeepCmpError;
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Ordered string-keyed mapping. Iteration order is insertion order.
pub type Mapping = IndexMap<String, Value>;

/// Largest absolute timestamp (ms since epoch) a date may carry.
pub const MAX_TIME_MILLIS: i64 = 8_640_000_000_000_000;

/// Marker rendered in place of an invalid date.
pub const INVALID_DATE: &str = "Invalid Date";

/// Canonical regex flag order.
const FLAG_ORDER: &str = "dgimsuvy";

/// A comparable value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value was provided
    Undefined,
    /// Explicit null
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(String),
    /// Symbol-like primitive, compared by identity
    Symbol(Handle),
    Date(DateValue),
    Regex(RegexValue),
    Array(Vec<Value>),
    Object(Mapping),
    /// Host object of an unsupported kind, compared by identity
    Opaque(Handle),
}

impl Value {
    /// The not-a-number numeric value
    pub fn nan() -> Self {
        Value::Number(f64::NAN)
    }

    /// A fresh symbol with the given description
    pub fn symbol(description: impl AsRef<str>) -> Self {
        Value::Symbol(Handle::new(description))
    }

    /// A fresh opaque host object of the given class
    pub fn opaque(class: impl AsRef<str>) -> Self {
        Value::Opaque(Handle::new(class))
    }

    /// Build an object from `(key, value)` pairs, keeping their order.
    ///
    /// A repeated key keeps its first position and takes the last value.
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build an array from anything convertible into values
    pub fn array<V, I>(items: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::Number(v as f64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<Mapping> for Value {
    fn from(v: Mapping) -> Self {
        Value::Object(v)
    }
}

impl From<DateValue> for Value {
    fn from(v: DateValue) -> Self {
        Value::Date(v)
    }
}

impl From<RegexValue> for Value {
    fn from(v: RegexValue) -> Self {
        Value::Regex(v)
    }
}

/// Identity token for values compared by reference.
///
/// Clones share identity. Two handles created separately are never equal,
/// even when their descriptions match.
#[derive(Debug, Clone)]
pub struct Handle(Arc<str>);

impl Handle {
    /// Create a new handle with a fresh identity
    pub fn new(description: impl AsRef<str>) -> Self {
        Self(Arc::from(description.as_ref()))
    }

    /// Human-readable description (symbol description or class name)
    pub fn description(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Handle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A date instance, possibly invalid.
///
/// Stored as milliseconds since the Unix epoch. Any timestamp within
/// [`MAX_TIME_MILLIS`] of the epoch is valid, including years chrono
/// cannot represent. An invalid date is one whose timestamp is not a
/// number; it is still a date for classification purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateValue(Option<i64>);

/// 400 Gregorian years; the calendar repeats exactly after one cycle
const CYCLE_MILLIS: i64 = 146_097 * 86_400_000;
const CYCLE_YEARS: i64 = 400;

impl DateValue {
    /// An invalid date
    pub fn invalid() -> Self {
        Self(None)
    }

    /// Date from milliseconds since the Unix epoch; out of range is invalid
    pub fn from_millis(millis: i64) -> Self {
        if millis.unsigned_abs() > MAX_TIME_MILLIS.unsigned_abs() {
            return Self::invalid();
        }
        Self(Some(millis))
    }

    /// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (UTC midnight).
    ///
    /// Unparseable text yields an invalid date rather than an error.
    pub fn parse(text: &str) -> Self {
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Self::from_millis(dt.timestamp_millis());
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| Self::from_millis(Utc.from_utc_datetime(&naive).timestamp_millis()))
            .unwrap_or_else(Self::invalid)
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// Milliseconds since the epoch; `None` stands for NaN
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.0
    }

    /// ISO-8601 form with millisecond precision, e.g. `2025-01-01T12:00:00.000Z`.
    ///
    /// Years outside `0..=9999` use the signed six-digit form, e.g.
    /// `+275760-09-13T00:00:00.000Z` or `-000001-01-01T00:00:00.000Z`.
    pub fn to_iso_string(&self) -> Option<String> {
        let millis = self.0?;
        // shift into chrono's range by whole cycles, then restore the year
        let cycles = millis / CYCLE_MILLIS;
        let dt = Utc
            .timestamp_millis_opt(millis - cycles * CYCLE_MILLIS)
            .single()?;
        let year = i64::from(dt.year()) + cycles * CYCLE_YEARS;
        let year = if (0..=9999).contains(&year) {
            format!("{year:04}")
        } else {
            let sign = if year < 0 { '-' } else { '+' };
            format!("{sign}{:06}", year.abs())
        };
        Some(format!(
            "{year}-{}",
            dt.format("%m-%dT%H:%M:%S%.3fZ")
        ))
    }

    /// The instant as a chrono datetime, when chrono can represent it
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        self.0.and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    }
}

impl From<DateTime<Utc>> for DateValue {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_millis(dt.timestamp_millis())
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_iso_string() {
            Some(iso) => f.write_str(&iso),
            None => f.write_str(INVALID_DATE),
        }
    }
}

/// A regular expression: pattern source plus flags.
///
/// Flags are validated and stored in canonical order, so `/x/ig` and
/// `/x/gi` have the same canonical string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegexValue {
    source: String,
    flags: String,
}

impl RegexValue {
    /// Build a regex value, rejecting unknown or repeated flags.
    ///
    /// An empty source is stored as `(?:)`, the empty-pattern form.
    ///
    /// # Errors
    ///
    /// `InvalidRegexFlags` for an unknown or repeated flag, or `u` with `v`
    pub fn new(source: impl Into<String>, flags: &str) -> Result<Self, DeepCmpError> {
        let invalid = || DeepCmpError::InvalidRegexFlags {
            flags: flags.to_string(),
        };

        let mut seen = [false; FLAG_ORDER.len()];
        for c in flags.chars() {
            let idx = FLAG_ORDER.find(c).ok_or_else(invalid)?;
            if seen[idx] {
                return Err(invalid());
            }
            seen[idx] = true;
        }
        // unicode and unicode-sets modes are mutually exclusive
        if flags.contains('u') && flags.contains('v') {
            return Err(invalid());
        }

        let canonical: String = FLAG_ORDER
            .chars()
            .zip(seen)
            .filter_map(|(c, on)| on.then_some(c))
            .collect();

        let source = source.into();
        Ok(Self {
            source: if source.is_empty() {
                "(?:)".to_string()
            } else {
                source
            },
            flags: canonical,
        })
    }

    /// Parse a `/source/flags` literal
    ///
    /// # Errors
    ///
    /// `InvalidRegexFlags` when the literal is not slash-delimited or its
    /// flags are invalid
    pub fn parse_literal(literal: &str) -> Result<Self, DeepCmpError> {
        let body = literal
            .strip_prefix('/')
            .ok_or_else(|| DeepCmpError::InvalidRegexFlags {
                flags: literal.to_string(),
            })?;
        let end = body.rfind('/').ok_or_else(|| DeepCmpError::InvalidRegexFlags {
            flags: literal.to_string(),
        })?;
        Self::new(&body[..end], &body[end + 1..])
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }
}

impl fmt::Display for RegexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}
