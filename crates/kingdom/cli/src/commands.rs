//! Subcommands of the `kingdom` binary.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser};
use kingdom_content::{ContentFactory, KingdomContent};
use kingdom_core::{SettlementEngine, SettlementEvaluation, StackingMode};

use crate::config::CliConfig;
use crate::report::{KingdomReport, SettlementReport, write_json};

/// Options overriding the environment configuration.
#[derive(Args, Clone, Debug, Default)]
pub struct ContentArgs {
    /// Content directory (overrides KINGDOM_DATA_DIR)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Stacking mode: same-structures-stack or all-structures-stack
    /// (overrides KINGDOM_STACKING_MODE and config.toml)
    #[arg(short, long, value_name = "MODE")]
    mode: Option<StackingMode>,

    /// Pretty-print the JSON report
    #[arg(short, long)]
    pretty: bool,
}

impl ContentArgs {
    /// Flags win over environment variables, which win over config.toml.
    fn resolve(self, config: &CliConfig) -> Result<Session> {
        let data_dir = self.data_dir.unwrap_or_else(|| config.data_dir.clone());
        let content = ContentFactory::new(&data_dir)
            .load_kingdom()
            .with_context(|| format!("Failed to load kingdom content from {}", data_dir.display()))?;
        let stacking_mode = self
            .mode
            .or(config.stacking_mode)
            .unwrap_or(content.config.stacking_mode);

        tracing::info!(
            data_dir = %data_dir.display(),
            mode = %stacking_mode,
            settlements = content.settlements.len(),
            "content loaded"
        );

        Ok(Session {
            content,
            stacking_mode,
            pretty: self.pretty || config.pretty,
        })
    }
}

struct Session {
    content: KingdomContent,
    stacking_mode: StackingMode,
    pretty: bool,
}

impl Session {
    fn evaluate(&self) -> Result<Vec<SettlementEvaluation>> {
        SettlementEngine::new(&self.content.activities)
            .evaluate_kingdom(&self.content.settlements, self.stacking_mode)
            .context("Failed to evaluate kingdom")
    }
}

/// Evaluate every settlement of the roster
#[derive(Parser, Debug, Default)]
pub struct EvaluateKingdom {
    #[command(flatten)]
    content: ContentArgs,
}

impl EvaluateKingdom {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let session = self.content.resolve(config)?;
        let evaluations = session.evaluate()?;
        let report = KingdomReport::new(session.stacking_mode, &evaluations);
        write_json(&mut io::stdout().lock(), &report, session.pretty)
    }
}

/// Evaluate one settlement, including capital influence
#[derive(Parser, Debug)]
pub struct EvaluateSettlement {
    /// Settlement name as written in settlements.ron
    #[arg(value_name = "NAME")]
    name: String,

    #[command(flatten)]
    content: ContentArgs,
}

impl EvaluateSettlement {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let session = self.content.resolve(config)?;
        let evaluations = session.evaluate()?;
        let evaluation = evaluations
            .iter()
            .find(|e| e.name == self.name)
            .with_context(|| format!("Settlement '{}' is not in the roster", self.name))?;
        write_json(
            &mut io::stdout().lock(),
            &SettlementReport::new(evaluation),
            session.pretty,
        )
    }
}

/// List the structure catalog
#[derive(Parser, Debug)]
pub struct ListStructures {
    #[command(flatten)]
    content: ContentArgs,
}

impl ListStructures {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let session = self.content.resolve(config)?;
        let structures: Vec<_> = session.content.structures.iter().collect();
        write_json(&mut io::stdout().lock(), &structures, session.pretty)
    }
}
