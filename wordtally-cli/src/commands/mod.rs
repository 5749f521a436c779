//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use std::io::{self, Write};
use wordtally_core::{ReportFormat, SeparatorSet};

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Count the words of text files and write sorted reports
    Process(process::ProcessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List available report formats
    Formats,

    /// List the default separator characters
    Separators,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(&mut io::stdout().lock()),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing to `out`
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<()> {
        match self {
            ListCommands::Formats => {
                writeln!(out, "Available report formats:")?;
                for format in ReportFormat::ALL {
                    let marker = if *format == ReportFormat::default() {
                        " (default)"
                    } else {
                        ""
                    };
                    writeln!(out, "  {:<10} .{}{}", format.name(), format.extension(), marker)?;
                }
            }
            ListCommands::Separators => {
                writeln!(out, "Default separator characters:")?;
                for ch in SeparatorSet::standard().iter() {
                    writeln!(out, "  {ch:?}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(command: ListCommands) -> String {
        let mut out = Vec::new();
        command.execute(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_formats() {
        let text = listing(ListCommands::Formats);
        assert!(text.contains("html"));
        assert!(text.contains("(default)"));
        assert!(text.contains("markdown"));
        assert!(text.contains("json"));
    }

    #[test]
    fn test_list_separators() {
        let text = listing(ListCommands::Separators);
        assert!(text.contains("' '"));
        assert!(text.contains("'-'"));
        assert!(text.contains("'\"'"));
        assert_eq!(text.lines().count(), 12);
    }

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Formats,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Formats"));
    }
}
