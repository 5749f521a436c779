//! Configuration for the word counting pipeline

use crate::error::{Error, Result};
use crate::report::ReportFormat;
use crate::separators::SeparatorSet;

/// Default configuration constants
pub mod defaults {
    /// Title of generated HTML pages
    pub const TITLE: &str = "Word Count";
}

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) separators: SeparatorSet,
    pub(crate) format: ReportFormat,
    pub(crate) title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separators: SeparatorSet::standard(),
            format: ReportFormat::default(),
            title: defaults::TITLE.to_string(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Separator characters in effect
    pub fn separators(&self) -> &SeparatorSet {
        &self.separators
    }

    /// Report format in effect
    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Page title for formats that have one
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Configuration("title must not be empty".into()));
        }

        // lines never contain their terminator, so these could never match
        if let Some(ch) = self.separators.iter().find(|&ch| matches!(ch, '\n' | '\r')) {
            return Err(Error::Configuration(format!(
                "separator {ch:?} is a line terminator"
            )));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    separators: Option<SeparatorSet>,
    format: Option<ReportFormat>,
    title: Option<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the separator set
    pub fn separators(mut self, separators: SeparatorSet) -> Self {
        self.separators = Some(separators);
        self
    }

    /// Set the report format
    pub fn format(mut self, format: ReportFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Set the report format by name
    pub fn format_name(mut self, name: &str) -> Result<Self> {
        self.format = Some(name.parse()?);
        Ok(self)
    }

    /// Set the page title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(separators) = self.separators {
            config.separators = separators;
        }

        if let Some(format) = self.format {
            config.format = format;
        }

        if let Some(title) = self.title {
            config.title = title;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.separators(), &SeparatorSet::standard());
        assert_eq!(config.format(), ReportFormat::Html);
        assert_eq!(config.title(), "Word Count");
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::builder()
            .separators(SeparatorSet::from_chars([' ', '/']))
            .format_name("markdown")
            .unwrap()
            .title("Tally")
            .build()
            .unwrap();

        assert!(config.separators().contains('/'));
        assert!(!config.separators().contains('.'));
        assert_eq!(config.format(), ReportFormat::Markdown);
        assert_eq!(config.title(), "Tally");
    }

    #[test]
    fn test_blank_title_rejected() {
        let err = Config::builder().title("  ").build().unwrap_err();
        assert!(err.to_string().contains("title must not be empty"));
    }

    #[test]
    fn test_line_terminator_separator_rejected() {
        let err = Config::builder()
            .separators(SeparatorSet::from_chars([' ', '\n']))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_only_line_terminators_rejected() {
        let err = Config::builder()
            .separators(SeparatorSet::from_chars(['\r']))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("line terminator"));

        let config = Config::builder()
            .separators(SeparatorSet::from_chars([' ', '\t']))
            .build()
            .unwrap();
        assert!(config.separators().contains('\t'));
    }

    #[test]
    fn test_unknown_format_name() {
        assert!(Config::builder().format_name("docx").is_err());
    }
}
