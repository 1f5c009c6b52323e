use deepcmp_core::{DateValue, Discrepancy, DiscrepancyKind, RegexValue, Value};

/// Kinds of a discrepancy list, in order
#[allow(dead_code)]
pub fn kinds(found: &[Discrepancy]) -> Vec<DiscrepancyKind> {
    found.iter().map(|d| d.kind).collect()
}

/// Paths of a discrepancy list, in order
#[allow(dead_code)]
pub fn paths(found: &[Discrepancy]) -> Vec<&str> {
    found.iter().map(|d| d.path.as_str()).collect()
}

#[allow(dead_code)]
pub fn regex(source: &str, flags: &str) -> Value {
    Value::Regex(RegexValue::new(source, flags).expect("valid regex flags"))
}

#[allow(dead_code)]
pub fn date(text: &str) -> Value {
    Value::Date(DateValue::parse(text))
}

/// The built-in `(objA, objB)` profile pair
#[allow(dead_code)]
pub fn profile_pair() -> (Value, Value) {
    deepcmp_core::sample::profile_pair().expect("sample pair builds")
}
