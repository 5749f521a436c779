//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::error::CliError;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            return Err(CliError::InvalidOutput(format!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            ))
            .into());
        }

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = Self::generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the separator characters or output defaults");
        println!("2. Validate your configuration:");
        println!("   wordtally validate --config {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   wordtally process -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template() -> Result<String> {
        let body = CliConfig::default().to_toml()?;
        Ok(format!(
            "# wordtally configuration\n\
             #\n\
             # [separators] chars: characters that split words, one per entry.\n\
             #   They are never counted. Every other character is part of a word.\n\
             # [output] default_format: html, text, markdown or json.\n\
             # [output] title: <title> of HTML reports.\n\
             \n\
             {body}"
        ))
    }
}
