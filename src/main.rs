mod config;
mod coordinate;
mod decoder;
mod error;
mod extractor;
mod metadata;
mod processor;
mod report;
mod report_writers;
mod walker;

#[cfg(test)]
mod test_support;

use crate::config::{AppConfig, Overrides};
use crate::decoder::ExifDecoder;
use crate::error::AppError;
use crate::report::ReportSelection;
use crate::walker::ScanOutcome;
use anyhow::Result;
use clap::Parser;
use log::info;

/// Scan a directory of images and report the GPS position stored in each one.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Generate the HTML report
    #[arg(long)]
    html: bool,

    /// Generate the CSV report
    #[arg(long)]
    csv: bool,

    /// Root directory path for images
    #[arg(long)]
    path: Option<String>,

    /// Directory the reports are written to
    #[arg(long)]
    output_dir: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::new(Overrides {
        scan_directory: cli.path,
        output_directory: cli.output_dir,
        log_level: cli.log_level,
    })?;

    env_logger::Builder::new()
        .filter_level(config.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .init();

    info!("Starting geotag-report");

    let selection = ReportSelection::from_flags(cli.html, cli.csv);
    let outcome = run(&config, selection)?;

    for skipped in &outcome.skipped {
        info!("Skipped {}: {}", skipped.path.display(), skipped.reason);
    }
    info!("geotag-report finished");

    Ok(())
}

/// Scans the image tree, then writes the selected reports.
///
/// A walk error returns before any report file is created.
fn run(config: &AppConfig, selection: ReportSelection) -> Result<ScanOutcome, AppError> {
    let outcome = walker::collect_records(config, &ExifDecoder)?;
    report::emit_reports(config, selection, &outcome.records);
    Ok(outcome)
}
