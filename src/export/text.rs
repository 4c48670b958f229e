//! Plain-text export functionality.

use std::io::Write;

use anyhow::{Context, Result};

use crate::history::ScanRecord;

/// Formats one record as `<subject> - <type> scan - <threat> risk - <status> - <time>`.
pub fn format_text_line(record: &ScanRecord) -> String {
    format!(
        "{} - {} scan - {} risk - {} - {}",
        record.subject(),
        record.scan_type(),
        record.threat_level(),
        record.status(),
        record.occurred_at()
    )
}

/// Writes one line per record and returns the number of lines written.
pub fn export_text<'a, I, W>(records: I, mut writer: W) -> Result<usize>
where
    I: IntoIterator<Item = &'a ScanRecord>,
    W: Write,
{
    let mut record_count = 0;
    for record in records {
        writeln!(writer, "{}", format_text_line(record)).context("Failed to write text output")?;
        record_count += 1;
    }
    writer.flush().context("Failed to flush text output")?;
    Ok(record_count)
}
