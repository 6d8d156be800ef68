use crate::config::AppConfig;
use crate::error::AppError;
use crate::metadata::ImageRecord;
use crate::report_writers::{csv::CsvReportWriter, html::HtmlReportWriter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const COLUMN_HEADERS: [&str; 3] = ["File Path", "Latitude", "Longitude"];

/// Serializes a record collection into one report format.
pub trait ReportWriter {
    fn file_name(&self) -> &'static str;
    fn write_report(&self, records: &[ImageRecord], out: &mut dyn Write) -> Result<(), AppError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSelection {
    Csv,
    Html,
    Both,
}

impl ReportSelection {
    /// Exactly one flag picks that report; none or both emit everything.
    pub fn from_flags(html: bool, csv: bool) -> Self {
        match (html, csv) {
            (true, false) => ReportSelection::Html,
            (false, true) => ReportSelection::Csv,
            _ => ReportSelection::Both,
        }
    }

    fn writers(self) -> Vec<Box<dyn ReportWriter>> {
        match self {
            ReportSelection::Csv => vec![Box::new(CsvReportWriter)],
            ReportSelection::Html => vec![Box::new(HtmlReportWriter)],
            ReportSelection::Both => vec![Box::new(CsvReportWriter), Box::new(HtmlReportWriter)],
        }
    }
}

/// Writes every selected report. A failing report is logged and does not stop the others.
///
/// Returns the paths that were written.
pub fn emit_reports(
    config: &AppConfig,
    selection: ReportSelection,
    records: &[ImageRecord],
) -> Vec<PathBuf> {
    let output_directory = Path::new(&config.output_directory);
    let mut written = Vec::new();

    for writer in selection.writers() {
        match write_to_file(writer.as_ref(), output_directory, records) {
            Ok(path) => {
                log::info!("Wrote {} records to {}", records.len(), path.display());
                written.push(path);
            }
            Err(e) => log::error!("Error writing {} report: {}", writer.file_name(), e),
        }
    }

    written
}

fn write_to_file(
    writer: &dyn ReportWriter,
    output_directory: &Path,
    records: &[ImageRecord],
) -> Result<PathBuf, AppError> {
    let path = output_directory.join(writer.file_name());
    let file = File::create(&path).map_err(|source| AppError::ReportWrite {
        path: path.display().to_string(),
        source,
    })?;

    let mut out = BufWriter::new(file);
    writer.write_report(records, &mut out)?;
    out.flush()?;
    Ok(path)
}
