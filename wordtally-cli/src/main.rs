//! wordtally command-line entry point

use anyhow::Result;
use clap::Parser;
use wordtally_cli::commands::Commands;

/// Count words in text files and write sorted word-count reports
#[derive(Debug, Parser)]
#[command(name = "wordtally", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
