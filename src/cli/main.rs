//! catalog-model-cli - validate catalog model documents from the shell

use clap::{Parser, Subcommand};
use data_catalog_sdk::cli::commands::validate::handle_validate;

#[derive(Parser)]
#[command(name = "catalog-model-cli")]
#[command(about = "Validate data-catalog model documents", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON document against a model kind
    Validate {
        /// Model kind: database, table, partition, connection, condition,
        /// predicate, workflow-graph, create-crawler, create-trigger,
        /// create-workflow, batch-create-partition
        #[arg(long)]
        kind: String,
        /// Input file path, or `-` for stdin
        input: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { kind, input } => handle_validate(&kind, &input)?,
    }

    Ok(())
}
