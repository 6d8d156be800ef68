use crate::error::AppError;
use crate::metadata::{ImageRecord, NOT_AVAILABLE};
use crate::report::{ReportWriter, COLUMN_HEADERS};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use std::io::Write;

pub const HTML_FILE_NAME: &str = "exif-data.html";

const TABLE_STYLE: &str = r#"th,td { padding: 10px; font-size: 25px; font-family: "Courier New", monospace; }"#;

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlReportWriter;

impl HtmlReportWriter {
    fn render(&self, records: &[ImageRecord]) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta http-equiv="Content-Type" content="text/html; charset=utf-8";
                    style { (PreEscaped(TABLE_STYLE)) }
                }
                body {
                    table border="1" style="border-collapse:collapse" {
                        thead {
                            tr {
                                @for header in COLUMN_HEADERS {
                                    th { (header) }
                                }
                            }
                        }
                        tbody {
                            @for record in records {
                                tr style="padding:5px" {
                                    td { (cell(record.file_path())) }
                                    td { (cell(record.latitude())) }
                                    td { (cell(record.longitude())) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn cell(text: &str) -> &str {
    if text.is_empty() {
        NOT_AVAILABLE
    } else {
        text
    }
}

impl ReportWriter for HtmlReportWriter {
    fn file_name(&self) -> &'static str {
        HTML_FILE_NAME
    }

    fn write_report(&self, records: &[ImageRecord], out: &mut dyn Write) -> Result<(), AppError> {
        out.write_all(self.render(records).into_string().as_bytes())?;
        Ok(())
    }
}
