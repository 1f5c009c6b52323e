//! Built-in sample documents.
//!
//! A nested profile/metrics/metadata pair that produces every discrepancy
//! kind except `null-mismatch` and `nan-mismatch`. Used by the CLI `demo`
//! subcommand and as a fixture in tests.

use crate::errors::Result;
use crate::value::{DateValue, RegexValue, Value};

/// The `(objA, objB)` profile pair
///
/// # Errors
///
/// None in practice: the regex flags used are fixed and valid.
pub fn profile_pair() -> Result<(Value, Value)> {
    let reference = Value::Date(DateValue::parse("2025-01-01T12:00:00Z"));

    let a = Value::object([
        (
            "profile",
            Value::object([
                ("name", Value::from("Developer")),
                ("status", Value::Null),
                (
                    "settings",
                    Value::object([
                        ("flags", Value::Regex(RegexValue::new("debug", "g")?)),
                        ("theme", Value::from("dark")),
                        ("preferences", Value::Undefined),
                    ]),
                ),
            ]),
        ),
        (
            "metrics",
            Value::array([
                Value::from(10),
                Value::nan(),
                Value::object([("value", Value::from(100)), ("timestamp", reference)]),
                Value::array([Value::from("level1"), Value::array(["level2"])]),
            ]),
        ),
        (
            "metadata",
            Value::object([
                ("lastSeen", Value::Date(DateValue::parse("2024-12-31"))),
                ("version", Value::from(1.0)),
                ("tags", Value::array(["alpha", "beta"])),
            ]),
        ),
        ("extra", Value::from("should be missing")),
    ]);

    let b = Value::object([
        (
            "profile",
            Value::object([
                ("name", Value::from("Developer")),
                // null against undefined
                ("status", Value::Undefined),
                (
                    "settings",
                    Value::object([
                        ("flags", Value::Regex(RegexValue::new("debug", "i")?)),
                        ("theme", Value::from("light")),
                    ]),
                ),
            ]),
        ),
        (
            "metrics",
            Value::array([
                Value::from("10"),
                Value::nan(),
                Value::object([
                    ("value", Value::from(101)),
                    ("timestamp", Value::Date(DateValue::invalid())),
                ]),
                Value::array(["level1"]),
            ]),
        ),
        (
            "metadata",
            Value::object([
                ("lastSeen", Value::Date(DateValue::parse("2025-01-01"))),
                ("version", Value::from(1.0)),
            ]),
        ),
    ]);

    Ok((a, b))
}
