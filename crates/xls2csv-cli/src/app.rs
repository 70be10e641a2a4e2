//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use xls2csv_data::{BatchReport, Converter, FileOutcome, Method};

#[derive(Parser)]
#[command(name = "xls2csv")]
#[command(
    author,
    version,
    about = "Convert every .xls file in a directory to CSV",
    long_about = None
)]
struct Cli {
    /// Directory to scan for .xls files (outputs are written next to each source)
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Strict mode: exit with error code if any file failed to convert
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments, sets up logging and converts the directory.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    convert_command(&cli.dir, cli.strict)?;

    Ok(())
}

/// Install the stderr tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise the level follows `verbose`.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed (e.g. when embedded in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Execute the conversion over `dir`
///
/// Prints one line per file and a summary. In strict mode any failed file
/// turns into an error after the whole directory has been processed.
pub fn convert_command(dir: &Path, strict: bool) -> Result<BatchReport> {
    if !dir.is_dir() {
        anyhow::bail!("Input directory not found: {}", dir.display());
    }

    info!("xls2csv v{} scanning {}", env!("CARGO_PKG_VERSION"), dir.display());

    let converter = Converter::new();
    let report = converter
        .convert_dir(dir)
        .with_context(|| format!("Failed to list directory: {}", dir.display()))?;

    for outcome in &report.outcomes {
        println!("{}", outcome_line(outcome));
    }
    println!("{}", summary_line(&report));

    if strict && report.has_failures() {
        anyhow::bail!("{} file(s) failed to convert", report.failed().count());
    }

    Ok(report)
}

/// Human-readable line for one processed file
pub fn outcome_line(outcome: &FileOutcome) -> String {
    let name = display_name(&outcome.source);
    match &outcome.result {
        Ok(conversion) => match conversion.method {
            Method::Workbook => format!("Processed as XLS: {}", name),
            Method::Delimited(encoding) => {
                format!("Processed as CSV with encoding {}: {}", encoding, name)
            }
        },
        Err(e) => format!("Failed to process file {}: {}", name, e),
    }
}

/// One-line totals for a run
pub fn summary_line(report: &BatchReport) -> String {
    format!(
        "{} converted, {} failed",
        report.converted().count(),
        report.failed().count()
    )
}

/// File name only, falling back to the full path
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
