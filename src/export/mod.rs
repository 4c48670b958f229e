//! Export functionality for scan history.
//!
//! This module serializes scan records for sharing in three flat formats:
//! CSV (spreadsheets), JSON (raw records) and plain text (one line each).
//! Export is one-way; there is no import path.

mod csv;
mod json;
mod text;
mod types;

use std::io::{self, Write};

use anyhow::{Context, Result};
use log::info;

use crate::history::ScanRecord;

pub use self::csv::{export_csv, CSV_HEADER};
pub use json::export_json;
pub use text::{export_text, format_text_line};
pub use types::{ExportFormat, ExportOptions};

/// Writes `records` to `writer` in `format` and returns the number exported.
pub fn export_records<'a, I, W>(records: I, format: ExportFormat, writer: W) -> Result<usize>
where
    I: IntoIterator<Item = &'a ScanRecord>,
    W: Write,
{
    match format {
        ExportFormat::Csv => export_csv(records, writer),
        ExportFormat::Json => export_json(records, writer),
        ExportFormat::Text => export_text(records, writer),
    }
}

/// Renders `records` in `format` into a string.
pub fn render_records<'a, I>(records: I, format: ExportFormat) -> Result<String>
where
    I: IntoIterator<Item = &'a ScanRecord>,
{
    let mut buffer = Vec::new();
    export_records(records, format, &mut buffer)?;
    String::from_utf8(buffer).context("Export produced invalid UTF-8")
}

/// Exports `records` to the file named in `opts`, or to stdout.
pub fn export_to_path<'a, I>(records: I, opts: &ExportOptions) -> Result<usize>
where
    I: IntoIterator<Item = &'a ScanRecord>,
{
    let count = if let Some(output_path) = opts.output.as_ref() {
        let file = std::fs::File::create(output_path).context(format!(
            "Failed to create output file: {}",
            output_path.display()
        ))?;
        let count = export_records(records, opts.format, io::BufWriter::new(file))?;
        info!(
            "Exported {} record(s) as {:?} to {}",
            count,
            opts.format,
            output_path.display()
        );
        count
    } else {
        let stdout = io::stdout();
        export_records(records, opts.format, stdout.lock())?
    };
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ScanType;

    #[test]
    fn test_format_extension() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::Text.extension(), "txt");
    }

    #[test]
    fn test_render_empty_history() {
        let records: Vec<ScanRecord> = Vec::new();
        assert_eq!(
            render_records(&records, ExportFormat::Csv).unwrap(),
            "ID,URL,Type,Threat Level,Status,Time\n"
        );
        assert_eq!(render_records(&records, ExportFormat::Json).unwrap(), "[]\n");
        assert_eq!(render_records(&records, ExportFormat::Text).unwrap(), "");
    }

    #[test]
    fn test_text_line_format() {
        let record = ScanRecord::new("https://g00gle.com", ScanType::Url, 40, "5 min ago");
        assert_eq!(
            format_text_line(&record),
            "https://g00gle.com - url scan - medium risk - flagged - 5 min ago"
        );
    }
}
