//! Demo command
//!
//! Usage: deepcmp demo [--format <FORMAT>]
//!
//! Compares a built-in pair of nested profile documents under the labels
//! `objA` and `objB`.

use super::output::{render, OutputFormat};
use super::Outcome;
use clap::Args;
use deepcmp_core::logging_facility::{self, Profile};
use deepcmp_core::sample::profile_pair;
use deepcmp_core::{compare_objects, ComparisonConfig};

#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// Logging profile (development or production)
    #[arg(long)]
    pub log: Option<Profile>,
}

/// Execute demo command
pub fn execute(args: DemoArgs) -> Result<Outcome, Box<dyn std::error::Error>> {
    logging_facility::init(args.log.unwrap_or_default());

    let (a, b) = profile_pair()?;
    let config = ComparisonConfig::new("objA", "objB");
    let found = compare_objects(&a, &b, "", &config);

    println!("{}", render(&found, &config, args.format)?);
    Ok(Outcome::Equal)
}
