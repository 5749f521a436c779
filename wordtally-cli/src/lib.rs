//! wordtally CLI library
//!
//! This library provides the command-line interface around the
//! `wordtally-core` counting pipeline: argument handling, interactive
//! prompts, file resolution, configuration files and progress display.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
