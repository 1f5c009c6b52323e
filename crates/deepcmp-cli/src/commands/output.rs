//! Rendering of comparison results for stdout

use clap::ValueEnum;
use deepcmp_core::{render_human_summary, ComparisonConfig, Discrepancy};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown summary
    #[default]
    Summary,
    /// Fixed-shape discrepancy objects
    Json,
    /// Records keyed by the configured labels
    Records,
}

/// Render discrepancies in the requested format
pub fn render(
    found: &[Discrepancy],
    config: &ComparisonConfig,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Summary => Ok(render_human_summary(found, config)),
        OutputFormat::Json => serde_json::to_string_pretty(found),
        OutputFormat::Records => {
            let records: Vec<_> = found
                .iter()
                .map(|d| serde_json::Value::Object(d.to_record()))
                .collect();
            serde_json::to_string_pretty(&records)
        }
    }
}
