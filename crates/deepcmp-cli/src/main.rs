//! deepcmp CLI
//!
//! Command-line interface for structural deep comparison of JSON documents

use clap::{Parser, Subcommand};

mod commands;

use commands::Outcome;

#[derive(Debug, Parser)]
#[command(name = "deepcmp")]
#[command(about = "deepcmp - Structural deep comparison", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two JSON documents
    Compare(commands::compare::CompareArgs),
    /// Compare the built-in nested profile pair
    Demo(commands::demo::DemoArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::Demo(args) => commands::demo::execute(args),
    };

    match result {
        Ok(Outcome::Equal) => {}
        Ok(Outcome::Different) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
