//! Compare command
//!
//! Usage: deepcmp compare <A> <B> [--name-a <LABEL>] [--name-b <LABEL>]
//!        [--config <FILE>] [--format <FORMAT>] [--log <PROFILE>]

use super::output::{render, OutputFormat};
use super::Outcome;
use clap::Args;
use deepcmp_core::compare_objects;
use deepcmp_core::config::{load_config, CliConfig};
use deepcmp_core::json::read_json_file;
use deepcmp_core::logging_facility::{self, Profile};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// JSON document for side A
    pub a: PathBuf,

    /// JSON document for side B
    pub b: PathBuf,

    /// Label for side A (overrides the config file)
    #[arg(long)]
    pub name_a: Option<String>,

    /// Label for side B (overrides the config file)
    #[arg(long)]
    pub name_b: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// Logging profile (development or production)
    #[arg(long)]
    pub log: Option<Profile>,
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> Result<Outcome, Box<dyn std::error::Error>> {
    let file_config = match &args.config {
        Some(path) => load_config(path)?,
        None => CliConfig::default(),
    };
    let config = file_config.with_label_overrides(args.name_a, args.name_b);

    logging_facility::init(args.log.unwrap_or(config.logging.profile));

    let a = read_json_file(&args.a)?;
    let b = read_json_file(&args.b)?;

    let found = compare_objects(&a, &b, "", &config.labels);
    tracing::info!(
        a = %args.a.display(),
        b = %args.b.display(),
        discrepancy_count = found.len() as u64,
        "documents compared"
    );

    println!("{}", render(&found, &config.labels, args.format)?);

    Ok(if found.is_empty() {
        Outcome::Equal
    } else {
        Outcome::Different
    })
}
