use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use success_ips::{aggregate_path, logging, write_report, ReportOutcome, OUTPUT_FILE};

/// success-ips — list client IPs that were served successful HTTP GET requests.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "success-ips",
    version,
    about = "Count successful HTTP GET requests per client IP in a web-server access log.",
    long_about = None
)]
struct Cli {
    /// Full path to the webserver log file.
    logfile: PathBuf,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logging();

    if !cli.logfile.is_file() {
        eprintln!("The given input file does not exist!");
        return Ok(ExitCode::FAILURE);
    }

    debug!(logfile = %cli.logfile.display(), "parsing log");
    let table = aggregate_path(&cli.logfile)
        .with_context(|| format!("failed to parse log file: {}", cli.logfile.display()))?;

    match write_report(&table, OUTPUT_FILE)? {
        ReportOutcome::Written(path) => {
            println!("Output is available in file: {}", path.display());
        }
        ReportOutcome::Empty => {
            println!("IP table is empty! Exiting program.");
        }
    }
    Ok(ExitCode::SUCCESS)
}
