//! CSV export functionality.
//!
//! One row per record. The subject column is always quoted; the other columns
//! are quoted only when they contain a delimiter, quote or line break.

use std::io::Write;

use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::history::ScanRecord;

/// Column names of the CSV export
pub const CSV_HEADER: [&str; 6] = ["ID", "URL", "Type", "Threat Level", "Status", "Time"];

/// Writes `records` as CSV and returns the number of rows written.
pub fn export_csv<'a, I, W>(records: I, mut writer: W) -> Result<usize>
where
    I: IntoIterator<Item = &'a ScanRecord>,
    W: Write,
{
    writeln!(writer, "{}", CSV_HEADER.join(",")).context("Failed to write CSV header")?;

    let mut record_count = 0;
    for record in records {
        let metadata = encode_fields(&[
            record.scan_type().to_string(),
            record.threat_level().to_string(),
            record.status().to_string(),
            record.occurred_at().to_string(),
        ])
        .with_context(|| format!("Failed to encode CSV row for record {}", record.id()))?;

        writeln!(
            writer,
            "{},{},{}",
            record.id(),
            quote_always(record.subject()),
            metadata
        )
        .with_context(|| format!("Failed to write CSV row for record {}", record.id()))?;
        record_count += 1;
    }

    writer.flush().context("Failed to flush CSV output")?;
    Ok(record_count)
}

/// Quotes `field` unconditionally, doubling embedded quotes.
fn quote_always(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Encodes `fields` as one CSV line (no terminator), quoting only where needed.
fn encode_fields(fields: &[String]) -> Result<String> {
    let mut encoder = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    encoder.write_record(fields)?;
    let bytes = encoder.into_inner().context("Failed to flush CSV encoder")?;
    let line = String::from_utf8(bytes).context("CSV encoder produced invalid UTF-8")?;
    Ok(line.trim_end_matches('\n').to_string())
}
