//! Comparison output types.
//!
//! A [`Discrepancy`] has a fixed shape: both observed values plus the two
//! labels they were observed under. Label-keyed records are produced on
//! demand by [`Discrepancy::to_record`].

use crate::json::to_json;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of mismatch recorded by a discrepancy.
///
/// Serializes to the stable kebab-case literal (e.g. `type-mismatch`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiscrepancyKind {
    /// Host-level types or shapes differ
    TypeMismatch,
    /// Exactly one side is null
    NullMismatch,
    /// Exactly one side is absent
    UndefinedMismatch,
    /// Both dates are valid but their timestamps differ
    DateMismatch,
    /// Exactly one date is invalid
    InvalidDate,
    /// Sequences have different lengths
    ArrayLengthMismatch,
    /// Mappings have different key counts
    KeyLengthMismatch,
    /// A key exists on one side only
    MissingKey,
    /// Primitives of the same type differ
    ValueMismatch,
    /// Exactly one side is NaN
    NanMismatch,
    /// Regex canonical strings differ
    RegexMismatch,
}

impl DiscrepancyKind {
    /// Every kind, in declaration order
    pub const ALL: [DiscrepancyKind; 11] = [
        DiscrepancyKind::TypeMismatch,
        DiscrepancyKind::NullMismatch,
        DiscrepancyKind::UndefinedMismatch,
        DiscrepancyKind::DateMismatch,
        DiscrepancyKind::InvalidDate,
        DiscrepancyKind::ArrayLengthMismatch,
        DiscrepancyKind::KeyLengthMismatch,
        DiscrepancyKind::MissingKey,
        DiscrepancyKind::ValueMismatch,
        DiscrepancyKind::NanMismatch,
        DiscrepancyKind::RegexMismatch,
    ];

    /// Stable wire literal
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscrepancyKind::TypeMismatch => "type-mismatch",
            DiscrepancyKind::NullMismatch => "null-mismatch",
            DiscrepancyKind::UndefinedMismatch => "undefined-mismatch",
            DiscrepancyKind::DateMismatch => "date-mismatch",
            DiscrepancyKind::InvalidDate => "invalid-date",
            DiscrepancyKind::ArrayLengthMismatch => "array-length-mismatch",
            DiscrepancyKind::KeyLengthMismatch => "key-length-mismatch",
            DiscrepancyKind::MissingKey => "missing-key",
            DiscrepancyKind::ValueMismatch => "value-mismatch",
            DiscrepancyKind::NanMismatch => "nan-mismatch",
            DiscrepancyKind::RegexMismatch => "regex-mismatch",
        }
    }

    /// Title-case label for human-facing output
    pub fn title(&self) -> &'static str {
        match self {
            DiscrepancyKind::TypeMismatch => "Type Mismatch",
            DiscrepancyKind::NullMismatch => "Null Mismatch",
            DiscrepancyKind::UndefinedMismatch => "Undefined Mismatch",
            DiscrepancyKind::DateMismatch => "Date Mismatch",
            DiscrepancyKind::InvalidDate => "Invalid Date",
            DiscrepancyKind::ArrayLengthMismatch => "Array Length Mismatch",
            DiscrepancyKind::KeyLengthMismatch => "Key Length Mismatch",
            DiscrepancyKind::MissingKey => "Missing Key",
            DiscrepancyKind::ValueMismatch => "Value Mismatch",
            DiscrepancyKind::NanMismatch => "NaN Mismatch",
            DiscrepancyKind::RegexMismatch => "RegExp Mismatch",
        }
    }
}

impl fmt::Display for DiscrepancyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display labels for the two compared sides.
///
/// Labels are not validated. Empty or identical labels are accepted; see
/// [`Discrepancy::to_record`] for what identical labels do to records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    pub name_a: String,
    pub name_b: String,
}

impl ComparisonConfig {
    pub fn new(name_a: impl Into<String>, name_b: impl Into<String>) -> Self {
        Self {
            name_a: name_a.into(),
            name_b: name_b.into(),
        }
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self::new("expected", "actual")
    }
}

/// One recorded mismatch between two compared values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Discrepancy {
    /// Location in the compared structure; `(root)` at the top
    pub path: String,
    pub kind: DiscrepancyKind,
    /// Observed value on side A (`Undefined` when A lacks it)
    pub value_a: Value,
    /// Observed value on side B (`Undefined` when B lacks it)
    pub value_b: Value,
    pub label_a: String,
    pub label_b: String,
    pub message: String,
}

impl Discrepancy {
    /// Render as a label-keyed record:
    /// `{"path", "type", <label_a>: .., <label_b>: .., "message"}`.
    ///
    /// Labels become keys. If both labels are equal the B value overwrites
    /// the A value; a label equal to `path`, `type` or `message` overwrites
    /// that field in the same way.
    pub fn to_record(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut record = serde_json::Map::new();
        record.insert("path".to_string(), self.path.clone().into());
        record.insert("type".to_string(), self.kind.as_str().into());
        record.insert(self.label_a.clone(), to_json(&self.value_a));
        record.insert(self.label_b.clone(), to_json(&self.value_b));
        record.insert("message".to_string(), self.message.clone().into());
        record
    }
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} ({}: {}, {}: {})",
            self.path,
            self.kind,
            self.message,
            self.label_a,
            to_json(&self.value_a),
            self.label_b,
            to_json(&self.value_b)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(label_a: &str, label_b: &str) -> Discrepancy {
        Discrepancy {
            path: "a".to_string(),
            kind: DiscrepancyKind::ValueMismatch,
            value_a: Value::from(1),
            value_b: Value::from(2),
            label_a: label_a.to_string(),
            label_b: label_b.to_string(),
            message: "Value mismatch".to_string(),
        }
    }

    #[test]
    fn test_kind_literals_match_serde() {
        for kind in DiscrepancyKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::Value::String(kind.as_str().to_string()));
        }
    }

    #[test]
    fn test_kind_round_trips_from_literal() {
        let kind: DiscrepancyKind = serde_json::from_str("\"nan-mismatch\"").unwrap();
        assert_eq!(kind, DiscrepancyKind::NanMismatch);
    }

    #[test]
    fn test_default_labels() {
        let config = ComparisonConfig::default();
        assert_eq!(config.name_a, "expected");
        assert_eq!(config.name_b, "actual");
    }

    #[test]
    fn test_record_uses_labels_as_keys() {
        let record = sample("objA", "objB").to_record();
        assert_eq!(record["path"], "a");
        assert_eq!(record["type"], "value-mismatch");
        assert_eq!(record["objA"], 1.0);
        assert_eq!(record["objB"], 2.0);
    }

    #[test]
    fn test_identical_labels_overwrite() {
        let record = sample("same", "same").to_record();
        assert_eq!(record["same"], 2.0);
        assert_eq!(record.len(), 4);
    }
}
