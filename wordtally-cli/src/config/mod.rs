//! Configuration file support

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use wordtally_core::config::defaults;
use wordtally_core::{Config, ReportFormat, SeparatorSet, DEFAULT_SEPARATORS};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Word boundary configuration
    #[serde(default)]
    pub separators: SeparatorConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Separator-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SeparatorConfig {
    /// Separator characters, one per entry
    pub chars: Vec<String>,
}

impl Default for SeparatorConfig {
    fn default() -> Self {
        Self {
            chars: DEFAULT_SEPARATORS.iter().map(|ch| ch.to_string()).collect(),
        }
    }
}

impl SeparatorConfig {
    /// Convert the configured entries into a separator set
    pub fn to_separator_set(&self) -> Result<SeparatorSet, CliError> {
        self.chars
            .iter()
            .map(|entry| {
                let mut chars = entry.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Ok(ch),
                    _ => Err(CliError::ConfigError(format!(
                        "separator {entry:?} is not a single character"
                    ))),
                }
            })
            .collect()
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default report format
    pub default_format: String,

    /// Title of HTML reports
    pub title: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: ReportFormat::default().name().to_string(),
            title: defaults::TITLE.to_string(),
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config = toml::from_str(content)?;
        Ok(config)
    }

    /// Render this configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build the core pipeline configuration.
    ///
    /// `format` and `title` come from the command line and take precedence
    /// over the file.
    pub fn to_core_config(
        &self,
        format: Option<ReportFormat>,
        title: Option<&str>,
    ) -> Result<Config> {
        let separators = self.separators.to_separator_set()?;
        let format = match format {
            Some(format) => format,
            None => self
                .output
                .default_format
                .parse()
                .map_err(|e| CliError::ConfigError(format!("{e}")))?,
        };

        let config = Config::builder()
            .separators(separators)
            .format(format)
            .title(title.unwrap_or(&self.output.title))
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_matches_core_defaults() {
        let config = CliConfig::default().to_core_config(None, None).unwrap();
        assert_eq!(config.separators(), &SeparatorSet::standard());
        assert_eq!(config.format(), ReportFormat::Html);
        assert_eq!(config.title(), "Word Count");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = CliConfig::parse("[output]\ndefault_format = \"text\"\ntitle = \"T\"\n").unwrap();
        assert_eq!(config.separators, SeparatorConfig::default());
        assert_eq!(config.output.default_format, "text");
    }

    #[test]
    fn test_output_section_with_title_only() {
        let config = CliConfig::parse("[output]\ntitle = \"X\"\n").unwrap();
        assert_eq!(config.output.title, "X");
        assert_eq!(config.output.default_format, "html");

        let core = config.to_core_config(None, None).unwrap();
        assert_eq!(core.format(), ReportFormat::Html);
        assert_eq!(core.title(), "X");
    }

    #[test]
    fn test_empty_separator_section_uses_defaults() {
        let config = CliConfig::parse("[separators]\n").unwrap();
        assert_eq!(config.separators, SeparatorConfig::default());
    }

    #[test]
    fn test_custom_separators() {
        let config = CliConfig::parse("[separators]\nchars = [\" \", \"/\"]\n").unwrap();
        let set = config.separators.to_separator_set().unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![' ', '/']);
    }

    #[test]
    fn test_multi_char_separator_rejected() {
        let config = CliConfig::parse("[separators]\nchars = [\"ab\"]\n").unwrap();
        let err = config.to_core_config(None, None).unwrap_err();
        assert!(err.to_string().contains("not a single character"));
    }

    #[test]
    fn test_command_line_overrides() {
        let config = CliConfig::default()
            .to_core_config(Some(ReportFormat::Markdown), Some("Override"))
            .unwrap();
        assert_eq!(config.format(), ReportFormat::Markdown);
        assert_eq!(config.title(), "Override");
    }

    #[test]
    fn test_unknown_format_in_file() {
        let config = CliConfig::parse("[output]\ndefault_format = \"pdf\"\ntitle = \"T\"\n").unwrap();
        let err = config.to_core_config(None, None).unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_toml_round_trip() {
        let original = CliConfig::default();
        let parsed = CliConfig::parse(&original.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[output]\ndefault_format = \"json\"\ntitle = \"Counts\"\n").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.output.title, "Counts");
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/wordtally.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
