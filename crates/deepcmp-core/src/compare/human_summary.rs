//! Human-readable summary renderer for comparison results.

use crate::compare::model::{ComparisonConfig, Discrepancy, DiscrepancyKind};
use crate::json::to_json;
use crate::value::Value;
use std::collections::BTreeMap;

/// Longest rendered value before it is shortened with `...`
const MAX_VALUE_CHARS: usize = 60;

/// Render a Markdown summary of a discrepancy list.
///
/// The summary is intended for test failure output and review. It is
/// informational only and does not affect the structured result.
pub fn render_human_summary(found: &[Discrepancy], config: &ComparisonConfig) -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "## Comparison: {} vs {}\n\n",
        config.name_a, config.name_b
    ));

    if found.is_empty() {
        out.push_str("_No discrepancies found._\n");
        return out;
    }

    out.push_str(&format!("**Discrepancies**: {}\n\n", found.len()));

    // Counts by kind, in kind declaration order
    let mut by_kind: BTreeMap<DiscrepancyKind, usize> = BTreeMap::new();
    for d in found {
        *by_kind.entry(d.kind).or_insert(0) += 1;
    }
    out.push_str("### By Kind\n\n| Kind | Count |\n|---|---|\n");
    for (kind, count) in &by_kind {
        out.push_str(&format!("| {} | {} |\n", kind.as_str(), count));
    }
    out.push('\n');

    // Details
    out.push_str("### Details\n\n");
    for d in found {
        out.push_str(&format!(
            "- `{}` **{}**: {} ({}: `{}`, {}: `{}`)\n",
            d.path,
            d.kind.title(),
            d.message,
            d.label_a,
            short(&d.value_a),
            d.label_b,
            short(&d.value_b),
        ));
    }

    out
}

/// Compact single-line rendering of a value
fn short(value: &Value) -> String {
    let text = match value {
        Value::String(s) => s.clone(),
        other => to_json(other).to_string(),
    };
    if text.chars().count() <= MAX_VALUE_CHARS {
        text
    } else {
        let cut: String = text.chars().take(MAX_VALUE_CHARS - 3).collect();
        format!("{cut}...")
    }
}
