//! Process command implementation

use anyhow::{anyhow, Context, Result};
use clap::Args;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use wordtally_core::{ProcessingSummary, ReportFormat, WordCountProcessor};

use crate::config::CliConfig;
use crate::input::{prompt_line, resolve_patterns, FileReader};
use crate::output::{write_report, OutputTarget, ReportPaths};
use crate::progress::ProgressReporter;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob); prompts when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file, or directory for several inputs (default: stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report format (default: from config file, else html)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "WORDTALLY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Title of HTML reports
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// HTML page with a word/count table
    Html,
    /// Tab separated word and count per line
    Text,
    /// Markdown table
    Markdown,
    /// JSON document
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Html => ReportFormat::Html,
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Markdown => ReportFormat::Markdown,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting word count");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let config =
            file_config.to_core_config(self.format.map(Into::into), self.title.as_deref())?;
        let processor = WordCountProcessor::with_config(config);

        let (patterns, output) = if self.input.is_empty() {
            let stdin = io::stdin();
            self.prompt_request(&mut stdin.lock(), &mut io::stderr())?
        } else {
            (self.input.clone(), self.output.clone())
        };

        let files = resolve_patterns(&patterns)?;
        match OutputTarget::select(output.as_deref(), files.len())? {
            OutputTarget::Stdout => {
                let (report, _) = render_file(&processor, &files[0])?;
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(&report)
                    .and_then(|()| stdout.flush())
                    .context("Failed to write report to stdout")?;
            }
            OutputTarget::File(path) => {
                let (report, _) = render_file(&processor, &files[0])?;
                write_report(&path, &report)?;
            }
            OutputTarget::Directory(dir) => {
                self.process_into_directory(&processor, &files, &dir)?;
            }
        }

        Ok(())
    }

    /// Ask for the input file and, unless `--output` was given, the output
    /// file. A blank output answer means stdout.
    fn prompt_request<R, W>(
        &self,
        input: &mut R,
        prompts: &mut W,
    ) -> Result<(Vec<String>, Option<PathBuf>)>
    where
        R: BufRead,
        W: Write,
    {
        let name = prompt_line(input, prompts, "Enter the input file name:")?
            .filter(|answer| !answer.is_empty())
            .ok_or_else(|| anyhow!("No input file given"))?;

        let output = match &self.output {
            Some(path) => Some(path.clone()),
            None => prompt_line(
                input,
                prompts,
                "Enter the output file name (leave blank for stdout):",
            )?
            .filter(|answer| !answer.is_empty())
            .map(PathBuf::from),
        };

        Ok((vec![name], output))
    }

    fn process_into_directory(
        &self,
        processor: &WordCountProcessor,
        files: &[PathBuf],
        dir: &Path,
    ) -> Result<()> {
        let mut paths = ReportPaths::create(dir, processor.config().format())?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        for file in files {
            let report_path = paths.report_path(file)?;
            let (report, summary) = render_file(processor, file)?;
            write_report(&report_path, &report)?;
            log::info!("wrote {}", report_path.display());
            progress.file_completed(&FileReader::display_name(file), summary.distinct_words);
        }

        progress.finish();
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // a logger may already be installed when commands run in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Count one file and render its report in memory, so that a failed read
/// never leaves a partial report behind.
fn render_file(
    processor: &WordCountProcessor,
    path: &Path,
) -> Result<(Vec<u8>, ProcessingSummary)> {
    let reader = FileReader::open(path)?;
    let label = FileReader::display_name(path);

    let mut report = Vec::new();
    let summary = processor
        .process(reader, &mut report, &label)
        .with_context(|| format!("Failed to process {}", path.display()))?;

    log::info!(
        "{}: {} lines, {} words, {} distinct",
        label,
        summary.lines_read,
        summary.total_words,
        summary.distinct_words
    );
    Ok((report, summary))
}
