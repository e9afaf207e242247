//! Kingdom evaluator entry point.
//!
//! Loads kingdom content from a data directory, evaluates the settlement
//! roster and prints a JSON report on stdout. Logs go to stderr.
//!
//! # Examples
//!
//! ```bash
//! # Whole kingdom with bundled content
//! cargo run -p kingdom-cli
//!
//! # One settlement, every structure stacking
//! cargo run -p kingdom-cli -- settlement Tuskwater --mode all-structures-stack --pretty
//! ```
mod commands;
mod config;
mod logging;
mod report;

use anyhow::Result;
use clap::Parser;
use commands::{EvaluateKingdom, EvaluateSettlement, ListStructures};
use config::CliConfig;

/// Settlement structure evaluator
#[derive(Parser)]
#[command(name = "kingdom")]
#[command(about = "Evaluate settlement structure bonuses", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Parser)]
enum Command {
    /// Evaluate every settlement of the roster (default)
    Kingdom(EvaluateKingdom),

    /// Evaluate one settlement
    Settlement(EvaluateSettlement),

    /// List the structure catalog
    Structures(ListStructures),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    logging::setup_logging();

    let config = CliConfig::from_env();
    let cli = Cli::parse();

    match cli.command.unwrap_or_else(|| Command::Kingdom(EvaluateKingdom::default())) {
        Command::Kingdom(cmd) => cmd.execute(&config),
        Command::Settlement(cmd) => cmd.execute(&config),
        Command::Structures(cmd) => cmd.execute(&config),
    }
}
