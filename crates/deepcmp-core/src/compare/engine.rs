//! Recursive comparison engine.
//!
//! The core entry point is [`compare_objects`], which walks two values in
//! lockstep and returns every discrepancy found, in traversal order.
//! Sibling branches are independent: a mismatch in one never stops the
//! walk of another.
//!
//! Recursion depth equals the nesting depth of the deeper input; values
//! are acyclic by construction.

use crate::classify::{
    classify, host_type, is_date, is_nan_value, is_null, is_plain_object, is_undefined,
    is_valid_date, type_name, Classification,
};
use crate::compare::model::{ComparisonConfig, Discrepancy, DiscrepancyKind};
use crate::keys::{format_missing_values, union_keys};
use crate::path::{build_path, display_path};
use crate::value::{Mapping, RegexValue, Value};
use crate::{log_op_end, log_op_start};
use deepcmp_core_types::schema::OP_COMPARE_OBJECTS;
use std::time::Instant;

/// Deeply compare two values and return all discrepancies.
///
/// `path` is the location of `a`/`b` within some larger structure; pass
/// `""` for a top-level call. Discrepancies at the empty path are recorded
/// as `(root)`.
///
/// The comparison is total: it never fails and never panics on acyclic
/// input.
///
/// # Example
///
/// ```
/// use deepcmp_core::compare::{compare_objects, ComparisonConfig, DiscrepancyKind};
/// use deepcmp_core::Value;
///
/// let a = Value::object([("name", "John"), ("city", "Oslo")]);
/// let b = Value::object([("name", "Jane"), ("city", "Oslo")]);
///
/// let found = compare_objects(&a, &b, "", &ComparisonConfig::default());
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].path, "name");
/// assert_eq!(found[0].kind, DiscrepancyKind::ValueMismatch);
/// ```
pub fn compare_objects(
    a: &Value,
    b: &Value,
    path: &str,
    config: &ComparisonConfig,
) -> Vec<Discrepancy> {
    log_op_start!(
        OP_COMPARE_OBJECTS,
        label_a = config.name_a.as_str(),
        label_b = config.name_b.as_str()
    );
    let start = Instant::now();

    let mut found = Vec::new();
    compare_values(a, b, path, config, &mut found);

    log_op_end!(
        OP_COMPARE_OBJECTS,
        duration_ms = start.elapsed().as_millis() as u64,
        discrepancy_count = found.len() as u64
    );
    found
}

/// [`compare_objects`] at the root with the default `expected`/`actual` labels
pub fn compare(a: &Value, b: &Value) -> Vec<Discrepancy> {
    compare_objects(a, b, "", &ComparisonConfig::default())
}

/// Dispatch on the shapes of `a` and `b`. The first rule that applies
/// decides; absence and null are checked before any type check.
fn compare_values(
    a: &Value,
    b: &Value,
    path: &str,
    config: &ComparisonConfig,
    found: &mut Vec<Discrepancy>,
) {
    let (name_a, name_b) = (config.name_a.as_str(), config.name_b.as_str());

    let (absent_a, absent_b) = (is_undefined(a), is_undefined(b));
    if absent_a || absent_b {
        if absent_a != absent_b {
            let (missing, present) = if absent_a {
                (name_a, name_b)
            } else {
                (name_b, name_a)
            };
            record(
                found,
                path,
                DiscrepancyKind::UndefinedMismatch,
                a.clone(),
                b.clone(),
                config,
                format!("Value is undefined in {missing} but defined in {present}"),
            );
        }
        return;
    }

    let (null_a, null_b) = (is_null(a), is_null(b));
    if null_a || null_b {
        if null_a != null_b {
            let message = if null_a {
                format!("{name_a} is null, but {name_b} has a value")
            } else {
                format!("{name_a} has a value, but {name_b} is null")
            };
            record(
                found,
                path,
                DiscrepancyKind::NullMismatch,
                a.clone(),
                b.clone(),
                config,
                message,
            );
        }
        return;
    }

    if host_type(a) != host_type(b) {
        type_mismatch(a, b, path, config, found);
        return;
    }

    if is_date(a) && is_date(b) {
        compare_dates(a, b, path, config, found);
        return;
    }

    match (a, b) {
        (Value::Regex(x), Value::Regex(y)) => compare_regexes(x, y, path, config, found),
        (Value::Array(x), Value::Array(y)) => compare_sequences(x, y, path, config, found),
        (Value::Object(x), Value::Object(y)) => compare_mappings(x, y, path, config, found),
        _ if is_shape_mismatch(a, b) => type_mismatch(a, b, path, config, found),
        _ => compare_primitives(a, b, path, config, found),
    }
}

/// The two sides have different shapes and at least one is a date, regex
/// or sequence.
///
/// A mapping against an opaque object is not a shape mismatch; both fall
/// through to identity comparison.
fn is_shape_mismatch(a: &Value, b: &Value) -> bool {
    let loose = |v: &Value| is_plain_object(v) || classify(v) == Classification::Primitive;
    classify(a) != classify(b) && !(loose(a) && loose(b))
}

fn type_mismatch(
    a: &Value,
    b: &Value,
    path: &str,
    config: &ComparisonConfig,
    found: &mut Vec<Discrepancy>,
) {
    let message = format!(
        "Type mismatch: {} is {}, {} is {}",
        config.name_a,
        type_name(a),
        config.name_b,
        type_name(b)
    );
    record(
        found,
        path,
        DiscrepancyKind::TypeMismatch,
        a.clone(),
        b.clone(),
        config,
        message,
    );
}

fn compare_dates(
    a: &Value,
    b: &Value,
    path: &str,
    config: &ComparisonConfig,
    found: &mut Vec<Discrepancy>,
) {
    let millis = |v: &Value| match v {
        Value::Date(d) => d.timestamp_millis(),
        _ => None,
    };
    let iso = |v: &Value| match v {
        Value::Date(d) => Value::String(d.to_string()),
        other => other.clone(),
    };

    match (is_valid_date(a), is_valid_date(b)) {
        // two invalid dates are indistinguishable
        (false, false) => {}
        (true, true) => {
            if millis(a) != millis(b) {
                record(
                    found,
                    path,
                    DiscrepancyKind::DateMismatch,
                    iso(a),
                    iso(b),
                    config,
                    "Dates do not match".to_string(),
                );
            }
        }
        (valid_a, _) => {
            let faulty = if valid_a {
                &config.name_b
            } else {
                &config.name_a
            };
            record(
                found,
                path,
                DiscrepancyKind::InvalidDate,
                iso(a),
                iso(b),
                config,
                format!("Comparison failed: {faulty} contains an invalid Date object"),
            );
        }
    }
}

fn compare_regexes(
    a: &RegexValue,
    b: &RegexValue,
    path: &str,
    config: &ComparisonConfig,
    found: &mut Vec<Discrepancy>,
) {
    let (str_a, str_b) = (a.to_string(), b.to_string());
    if str_a == str_b {
        return;
    }

    let message = if a.source() != b.source() {
        format!("Regex patterns are different: {str_a} vs {str_b}")
    } else {
        format!(
            "Regex patterns are identical, but flags differ: /{}/ vs /{}/",
            a.flags(),
            b.flags()
        )
    };
    record(
        found,
        path,
        DiscrepancyKind::RegexMismatch,
        Value::String(str_a),
        Value::String(str_b),
        config,
        message,
    );
}

fn compare_sequences(
    a: &[Value],
    b: &[Value],
    path: &str,
    config: &ComparisonConfig,
    found: &mut Vec<Discrepancy>,
) {
    if a.len() != b.len() {
        let message = format!(
            "Array length mismatch: {} has {} elements, but {} has {} elements",
            qualified(&config.name_a, path),
            a.len(),
            qualified(&config.name_b, path),
            b.len()
        );
        record(
            found,
            path,
            DiscrepancyKind::ArrayLengthMismatch,
            Value::from(a.len()),
            Value::from(b.len()),
            config,
            message,
        );
    }

    // elements past the shorter length are covered by the length mismatch
    for (index, (item_a, item_b)) in a.iter().zip(b).enumerate() {
        compare_values(item_a, item_b, &build_path(path, index), config, found);
    }
}

fn compare_mappings(
    a: &Mapping,
    b: &Mapping,
    path: &str,
    config: &ComparisonConfig,
    found: &mut Vec<Discrepancy>,
) {
    let keys_a: Vec<&str> = a.keys().map(String::as_str).collect();
    let keys_b: Vec<&str> = b.keys().map(String::as_str).collect();

    if keys_a.len() != keys_b.len() {
        let delta = format_missing_values(&keys_a, &keys_b, &config.name_a, &config.name_b);
        let message = if delta.is_empty() {
            "Key count mismatch".to_string()
        } else {
            format!("Key count mismatch: {delta}")
        };
        record(
            found,
            path,
            DiscrepancyKind::KeyLengthMismatch,
            Value::from(keys_a.len()),
            Value::from(keys_b.len()),
            config,
            message,
        );
    }

    for key in union_keys(keys_a.iter().copied(), keys_b.iter().copied()) {
        let key_path = build_path(path, key);
        match (a.get(key), b.get(key)) {
            (Some(value_a), Some(value_b)) => {
                compare_values(value_a, value_b, &key_path, config, found)
            }
            (Some(value_a), None) => {
                let message = format!(
                    "Property \"{key}\" is missing in {} but exists in {}",
                    qualified(&config.name_b, &key_path),
                    qualified(&config.name_a, &key_path)
                );
                record(
                    found,
                    &key_path,
                    DiscrepancyKind::MissingKey,
                    value_a.clone(),
                    Value::Undefined,
                    config,
                    message,
                );
            }
            (None, Some(value_b)) => {
                let message = format!(
                    "Property \"{key}\" is missing in {} but exists in {}",
                    qualified(&config.name_a, &key_path),
                    qualified(&config.name_b, &key_path)
                );
                record(
                    found,
                    &key_path,
                    DiscrepancyKind::MissingKey,
                    Value::Undefined,
                    value_b.clone(),
                    config,
                    message,
                );
            }
            (None, None) => {}
        }
    }
}

fn compare_primitives(
    a: &Value,
    b: &Value,
    path: &str,
    config: &ComparisonConfig,
    found: &mut Vec<Discrepancy>,
) {
    let (nan_a, nan_b) = (is_nan_value(a), is_nan_value(b));
    if nan_a && nan_b {
        return;
    }
    if nan_a || nan_b {
        let side = if nan_a { &config.name_a } else { &config.name_b };
        let message = format!(
            "Value mismatch: {} is NaN (Not-a-Number) while the other side is a valid number or type",
            qualified(side, path)
        );
        record(
            found,
            path,
            DiscrepancyKind::NanMismatch,
            a.clone(),
            b.clone(),
            config,
            message,
        );
        return;
    }

    if !strictly_equal(a, b) {
        record(
            found,
            path,
            DiscrepancyKind::ValueMismatch,
            a.clone(),
            b.clone(),
            config,
            "Value mismatch".to_string(),
        );
    }
}

/// Value-and-type identity. Symbols and opaque objects compare by identity;
/// anything structured reaching this point (a mapping against an opaque
/// object) is unequal.
fn strictly_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::BigInt(x), Value::BigInt(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Symbol(x), Value::Symbol(y)) => x == y,
        (Value::Opaque(x), Value::Opaque(y)) => x == y,
        _ => false,
    }
}

/// `label.path` for messages; the label alone at the root
fn qualified(label: &str, path: &str) -> String {
    if path.is_empty() {
        label.to_string()
    } else if path.starts_with('[') {
        format!("{label}{path}")
    } else {
        format!("{label}.{path}")
    }
}

fn record(
    found: &mut Vec<Discrepancy>,
    path: &str,
    kind: DiscrepancyKind,
    value_a: Value,
    value_b: Value,
    config: &ComparisonConfig,
    message: String,
) {
    let path = display_path(path);
    tracing::debug!(path, kind = kind.as_str(), "discrepancy recorded");
    found.push(Discrepancy {
        path: path.to_string(),
        kind,
        value_a,
        value_b,
        label_a: config.name_a.clone(),
        label_b: config.name_b.clone(),
        message,
    });
}
