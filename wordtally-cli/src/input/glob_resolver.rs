//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Resolve input arguments to file paths.
///
/// An argument naming an existing file is taken literally, so names that
/// contain glob metacharacters still work; anything else is expanded as a
/// glob pattern. The result is sorted and free of duplicates.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let literal = Path::new(pattern);
        if literal.is_file() {
            files.push(literal.to_path_buf());
            continue;
        }

        let paths = glob(pattern).map_err(|e| {
            CliError::InvalidPattern(format!("{pattern} ({})", e.msg))
        })?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    files.sort();
    files.dedup();

    log::debug!("resolved {} input files", files.len());
    Ok(files)
}
