//! File opening utilities

use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::CliError;

/// Opens input documents as line-oriented readers
pub struct FileReader;

impl FileReader {
    /// Open a file for buffered line reading
    pub fn open(path: &Path) -> Result<BufReader<File>> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let file =
            File::open(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(BufReader::new(file))
    }

    /// Label shown in the report heading for `path`
    pub fn display_name(path: &Path) -> String {
        path.display().to_string()
    }
}
