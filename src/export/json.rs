//! JSON export functionality.
//!
//! Dumps the raw record array as pretty-printed JSON.

use std::io::Write;

use anyhow::{Context, Result};

use crate::history::ScanRecord;

/// Writes `records` as a pretty-printed JSON array and returns the record count.
pub fn export_json<'a, I, W>(records: I, mut writer: W) -> Result<usize>
where
    I: IntoIterator<Item = &'a ScanRecord>,
    W: Write,
{
    let records: Vec<&ScanRecord> = records.into_iter().collect();
    serde_json::to_writer_pretty(&mut writer, &records).context("Failed to serialize records")?;
    writeln!(writer).context("Failed to write JSON output")?;
    writer.flush().context("Failed to flush JSON output")?;
    Ok(records.len())
}
