use crate::error::AppError;
use crate::metadata::ImageRecord;
use crate::report::{ReportWriter, COLUMN_HEADERS};
use csv::WriterBuilder;
use std::io::Write;

pub const CSV_FILE_NAME: &str = "exif-data.csv";

#[derive(Debug, Default, Clone, Copy)]
pub struct CsvReportWriter;

impl ReportWriter for CsvReportWriter {
    fn file_name(&self) -> &'static str {
        CSV_FILE_NAME
    }

    fn write_report(&self, records: &[ImageRecord], out: &mut dyn Write) -> Result<(), AppError> {
        // Header goes out even when there are no rows.
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(out);
        writer.write_record(COLUMN_HEADERS)?;
        for record in records {
            writer.write_record([record.file_path(), record.latitude(), record.longitude()])?;
        }
        writer.flush()?;
        Ok(())
    }
}
