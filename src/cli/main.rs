use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use scorpion::config::{self, OutputFormat};
use scorpion::report;

#[derive(Parser, Debug)]
#[command(
    name = "scorpion",
    version,
    about = "Print file metadata and EXIF tags for JPEG, PNG, and TIFF images"
)]
struct Cli {
    /// Image files to inspect
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Path to a JSON config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init: bool,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Exit with status 1 if any file could not be inspected
    #[arg(long)]
    strict: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// How the process should exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let stdout = io::stdout();
    let status = run(&cli, &mut stdout.lock())?;
    Ok(status.into())
}

/// Inspect every file named on the command line and write the report to `out`.
fn run(cli: &Cli, out: &mut impl Write) -> Result<Status> {
    // Handle --init
    if cli.init {
        let path = config::Config::default().save(cli.config.as_deref())?;
        writeln!(out, "Default config written to {}", path.display())?;
        return Ok(Status::Success);
    }

    if cli.files.is_empty() {
        writeln!(out, "Usage: scorpion FILE1 [FILE2 ...]")?;
        return Ok(Status::Success);
    }

    // Load config, CLI flags override
    let mut config = config::Config::load(cli.config.as_deref())?;
    if cli.json {
        config.output.format = OutputFormat::Json;
    }
    if cli.strict {
        config.output.strict = true;
    }

    let mut reports = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        let result = report::inspect(path);

        if result.is_failure() {
            log::debug!("Could not fully inspect {}", path.display());
        }
        if config.output.format == OutputFormat::Text {
            for line in result.lines() {
                writeln!(out, "{line}")?;
            }
        }

        reports.push(result);
    }

    // JSON output
    if config.output.format == OutputFormat::Json {
        let json: Vec<_> = reports.iter().map(|r| r.to_json()).collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
    }

    // Summary
    let total = reports.len();
    let skipped = reports
        .iter()
        .filter(|r| !matches!(r.inspection, report::Inspection::Inspected { .. }))
        .count();
    let failed = reports.iter().filter(|r| r.is_failure()).count();
    log::debug!(
        "Done: {} inspected, {skipped} skipped, {failed} failed out of {total} files",
        total - skipped
    );

    if config.output.strict && failed > 0 {
        return Ok(Status::Failure);
    }
    Ok(Status::Success)
}
