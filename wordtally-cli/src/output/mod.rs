//! Report destinations

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use wordtally_core::ReportFormat;

use crate::error::CliError;

/// Where reports are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard output (single input only)
    Stdout,
    /// A single report file
    File(PathBuf),
    /// One report per input inside this directory
    Directory(PathBuf),
}

impl OutputTarget {
    /// Choose a target for `input_count` inputs and an optional `-o` path.
    ///
    /// Several inputs need a directory; an existing directory is accepted
    /// even for a single input.
    pub fn select(output: Option<&Path>, input_count: usize) -> Result<Self> {
        match output {
            None if input_count > 1 => Err(CliError::InvalidOutput(
                "multiple input files require --output <DIR>".into(),
            )
            .into()),
            None => Ok(OutputTarget::Stdout),
            Some(path) if input_count > 1 || path.is_dir() => {
                if path.exists() && !path.is_dir() {
                    return Err(CliError::InvalidOutput(format!(
                        "{} is not a directory",
                        path.display()
                    ))
                    .into());
                }
                Ok(OutputTarget::Directory(path.to_path_buf()))
            }
            Some(path) => Ok(OutputTarget::File(path.to_path_buf())),
        }
    }
}

/// Assigns one report path per input inside an output directory
#[derive(Debug)]
pub struct ReportPaths {
    dir: PathBuf,
    format: ReportFormat,
    used: HashSet<PathBuf>,
}

impl ReportPaths {
    /// Create the directory if needed
    pub fn create(dir: &Path, format: ReportFormat) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
        Ok(Self {
            dir: dir.to_path_buf(),
            format,
            used: HashSet::new(),
        })
    }

    /// `<dir>/<input stem>.<extension>`; two inputs with the same stem are
    /// rejected rather than overwriting each other.
    pub fn report_path(&mut self, input: &Path) -> Result<PathBuf> {
        let stem = input.file_stem().ok_or_else(|| {
            CliError::InvalidOutput(format!("{} has no file name", input.display()))
        })?;

        let mut path = self.dir.join(stem);
        path.set_extension(self.format.extension());

        if !self.used.insert(path.clone()) {
            return Err(CliError::InvalidOutput(format!(
                "two inputs would both be written to {}",
                path.display()
            ))
            .into());
        }
        Ok(path)
    }
}

/// Write a finished report, creating or truncating the file
pub fn write_report(path: &Path, report: &[u8]) -> Result<()> {
    fs::write(path, report)
        .with_context(|| format!("Failed to write report: {}", path.display()))
}
