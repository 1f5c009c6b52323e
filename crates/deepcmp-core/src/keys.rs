//! Key set helpers for mapping comparison.

use std::collections::BTreeSet;

/// Items present on one side only
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingValues {
    /// Items of B that A lacks, in B's order
    pub missing_in_a: Vec<String>,
    /// Items of A that B lacks, in A's order
    pub missing_in_b: Vec<String>,
}

impl MissingValues {
    pub fn is_empty(&self) -> bool {
        self.missing_in_a.is_empty() && self.missing_in_b.is_empty()
    }
}

/// Compute the set-delta between two key lists.
pub fn detect_missing_values<A, B>(a: &[A], b: &[B]) -> MissingValues
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let set_a: BTreeSet<&str> = a.iter().map(AsRef::as_ref).collect();
    let set_b: BTreeSet<&str> = b.iter().map(AsRef::as_ref).collect();
    let missing_in_a = b
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !set_a.contains(s))
        .map(str::to_string)
        .collect();
    let missing_in_b = a
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !set_b.contains(s))
        .map(str::to_string)
        .collect();
    MissingValues {
        missing_in_a,
        missing_in_b,
    }
}

/// Describe the set-delta, e.g. `[b] missing in expected; [c] missing in actual`.
///
/// Returns an empty string when both sides hold the same keys.
pub fn format_missing_values<A, B>(a: &[A], b: &[B], name_a: &str, name_b: &str) -> String
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let missing = detect_missing_values(a, b);
    let mut parts = Vec::new();
    if !missing.missing_in_a.is_empty() {
        parts.push(format!(
            "[{}] missing in {}",
            missing.missing_in_a.join(", "),
            name_a
        ));
    }
    if !missing.missing_in_b.is_empty() {
        parts.push(format!(
            "[{}] missing in {}",
            missing.missing_in_b.join(", "),
            name_b
        ));
    }
    parts.join("; ")
}

/// Union of two key lists: A's keys in A's order, then B-only keys in B's order.
pub fn union_keys<'k, A, B>(a: A, b: B) -> Vec<&'k str>
where
    A: IntoIterator<Item = &'k str>,
    B: IntoIterator<Item = &'k str>,
{
    let mut seen = BTreeSet::new();
    a.into_iter()
        .chain(b)
        .filter(|k| seen.insert(*k))
        .collect()
}
