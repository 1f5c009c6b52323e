/// Scenario 1: Nested Profile Comparison
///
/// Compares two nested profile/metrics/metadata documents that differ in
/// almost every way a comparison can report, and checks the full ordered
/// discrepancy list.
mod common;

use common::{kinds, paths, profile_pair};
use deepcmp_core::{compare_objects, ComparisonConfig, DiscrepancyKind, Value};

fn run() -> Vec<deepcmp_core::Discrepancy> {
    let (a, b) = profile_pair();
    compare_objects(&a, &b, "", &ComparisonConfig::new("objA", "objB"))
}

#[test]
fn test_scenario_01_reports_every_difference_in_traversal_order() {
    // GIVEN two nested documents with labels objA/objB
    // WHEN they are compared
    let found = run();

    // THEN every difference is reported, A-side keys first, indices ascending
    assert_eq!(
        paths(&found),
        vec![
            "(root)",
            "profile.status",
            "profile.settings",
            "profile.settings.flags",
            "profile.settings.theme",
            "profile.settings.preferences",
            "metrics[0]",
            "metrics[2].value",
            "metrics[2].timestamp",
            "metrics[3]",
            "metadata",
            "metadata.lastSeen",
            "metadata.tags",
            "extra",
        ]
    );
    assert_eq!(
        kinds(&found),
        vec![
            DiscrepancyKind::KeyLengthMismatch,
            DiscrepancyKind::UndefinedMismatch,
            DiscrepancyKind::KeyLengthMismatch,
            DiscrepancyKind::RegexMismatch,
            DiscrepancyKind::ValueMismatch,
            DiscrepancyKind::MissingKey,
            DiscrepancyKind::TypeMismatch,
            DiscrepancyKind::ValueMismatch,
            DiscrepancyKind::InvalidDate,
            DiscrepancyKind::ArrayLengthMismatch,
            DiscrepancyKind::KeyLengthMismatch,
            DiscrepancyKind::DateMismatch,
            DiscrepancyKind::MissingKey,
            DiscrepancyKind::MissingKey,
        ]
    );
}

#[test]
fn test_scenario_01_nan_pair_is_equal() {
    // GIVEN NaN at metrics[1] on both sides
    let found = run();

    // THEN nothing is reported at that index
    assert!(found.iter().all(|d| d.path != "metrics[1]"));
    assert!(!kinds(&found).contains(&DiscrepancyKind::NanMismatch));
}

#[test]
fn test_scenario_01_messages_use_labels() {
    let found = run();
    let message_at = |path: &str| {
        found
            .iter()
            .find(|d| d.path == path)
            .map(|d| d.message.clone())
            .expect("discrepancy at path")
    };

    assert_eq!(
        message_at("(root)"),
        "Key count mismatch: [extra] missing in objB"
    );
    assert_eq!(
        message_at("profile.status"),
        "Value is undefined in objB but defined in objA"
    );
    assert_eq!(
        message_at("profile.settings.flags"),
        "Regex patterns are identical, but flags differ: /g/ vs /i/"
    );
    assert_eq!(
        message_at("metrics[0]"),
        "Type mismatch: objA is number, objB is string"
    );
    assert_eq!(
        message_at("metrics[2].timestamp"),
        "Comparison failed: objB contains an invalid Date object"
    );
    assert_eq!(
        message_at("metrics[3]"),
        "Array length mismatch: objA.metrics[3] has 2 elements, but objB.metrics[3] has 1 elements"
    );
    assert_eq!(
        message_at("extra"),
        "Property \"extra\" is missing in objB.extra but exists in objA.extra"
    );
}

#[test]
fn test_scenario_01_values_carried_on_discrepancies() {
    let found = run();

    let date = found
        .iter()
        .find(|d| d.kind == DiscrepancyKind::DateMismatch)
        .expect("date mismatch");
    assert_eq!(date.value_a, Value::from("2024-12-31T00:00:00.000Z"));
    assert_eq!(date.value_b, Value::from("2025-01-01T00:00:00.000Z"));

    let preferences = found
        .iter()
        .find(|d| d.path == "profile.settings.preferences")
        .expect("preferences missing");
    assert_eq!(preferences.value_a, Value::Undefined);
    assert_eq!(preferences.value_b, Value::Undefined);

    let root = &found[0];
    assert_eq!(root.value_a, Value::from(4));
    assert_eq!(root.value_b, Value::from(3));
}

#[test]
fn test_scenario_01_records_keyed_by_labels() {
    let found = run();
    let record = found[4].to_record();

    assert_eq!(record["path"], "profile.settings.theme");
    assert_eq!(record["type"], "value-mismatch");
    assert_eq!(record["objA"], "dark");
    assert_eq!(record["objB"], "light");
    assert_eq!(record["message"], "Value mismatch");
}

#[test]
fn test_scenario_01_reverse_direction_detects_same_locations() {
    let (a, b) = profile_pair();
    let config = ComparisonConfig::new("objB", "objA");
    let reversed = compare_objects(&b, &a, "", &config);

    let mut forward_paths = paths(&run()).into_iter().map(String::from).collect::<Vec<_>>();
    let mut reverse_paths = paths(&reversed)
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();
    forward_paths.sort();
    reverse_paths.sort();
    assert_eq!(forward_paths, reverse_paths);
}
