//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let checked = CliConfig::load(&self.config).and_then(|c| c.to_core_config(None, None));
        match checked {
            Ok(config) => {
                let separators: String = config.separators().iter().collect();
                println!("✓ Configuration is valid!");
                println!("  Separators: {:?}", separators);
                println!("  Format: {}", config.format());
                println!("  Title: {}", config.title());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            config: PathBuf::from("test.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("test.toml"));
    }

    #[test]
    fn test_validate_valid_config() {
        let toml_content = r#"
[separators]
chars = [" ", ".", ","]

[output]
default_format = "markdown"
title = "Tally"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_config() {
        let toml_content = r#"
[separators]
chars = [" ", "--"]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("not a single character"));
    }

    #[test]
    fn test_validate_malformed_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[output\ndefault_format = ").unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_err());
    }
}
