//! Scan session runner.

use anyhow::{Context, Result};
use log::info;

use crate::analysis::RiskEngine;
use crate::app::{collect_inputs, format_history_view, prepare_input, print_history_statistics};
use crate::config::Config;
use crate::export::{export_to_path, ExportOptions};
use crate::history::{history_view, HistoryStats, QueryOptions, ScanRecordStore, ScanStatus};
use crate::initialization::init_catalog;

/// Results of a scan session.
///
/// Contains summary counts plus the session history itself.
#[derive(Debug, Clone)]
pub struct SessionReport {
    /// Number of inputs that were scanned
    pub total_scanned: usize,
    /// Inputs rejected before analysis (blank or too long)
    pub rejected: usize,
    /// Records classified safe
    pub safe: usize,
    /// Records classified flagged (warn)
    pub flagged: usize,
    /// Records classified blocked
    pub blocked: usize,
    /// Records written by the export, if one was requested
    pub exported: Option<usize>,
    /// Session history, one record per scanned input in scan order
    pub store: ScanRecordStore,
    /// Grouped history view rendered with the configured filter and sort
    pub history: String,
}

/// Runs a scan session with the provided configuration.
///
/// Collects inputs, scans each one, records the outcomes in a fresh
/// [`ScanRecordStore`], logs history statistics and optionally exports the
/// filtered history.
///
/// # Errors
///
/// Returns an error if:
/// - The indicator catalog file cannot be loaded
/// - The input file cannot be read
/// - The export destination cannot be written
///
/// # Example
///
/// ```no_run
/// use phish_scan::{run_session, Config};
///
/// # fn main() -> anyhow::Result<()> {
/// let config = Config {
///     inputs: vec!["http://paypal-security.example/login".to_string()],
///     ..Default::default()
/// };
/// let report = run_session(config)?;
/// println!("{} blocked", report.blocked);
/// # Ok(())
/// # }
/// ```
pub fn run_session(config: Config) -> Result<SessionReport> {
    let catalog = init_catalog(config.catalog.as_deref())
        .context("Failed to initialize indicator catalog")?;
    let engine = RiskEngine::new(catalog);

    let raw_inputs = collect_inputs(&config.inputs, config.file.as_deref())?;
    info!(
        "Scanning {} {} input{}",
        raw_inputs.len(),
        config.scan_type,
        if raw_inputs.len() == 1 { "" } else { "s" }
    );

    let mut store = ScanRecordStore::new();
    let mut rejected = 0usize;
    for raw in &raw_inputs {
        let Some(input) = prepare_input(raw, config.scan_type) else {
            rejected += 1;
            continue;
        };
        let outcome = engine.scan(&input);
        store.add_outcome(&outcome);
    }

    let stats = HistoryStats::from_records(&store);
    print_history_statistics(&stats);

    let options = QueryOptions {
        status_filter: config.status_filter,
        text_filter: config.search.clone(),
        sort_key: config.sort,
    };
    let view = history_view(&store, &options);
    let history = format_history_view(&view);

    let exported = match config.export_format {
        Some(format) => {
            let opts = ExportOptions {
                output: config.export_output.clone(),
                format,
            };
            let count = export_to_path(view.records(), &opts)
                .context("Failed to export scan history")?;
            Some(count)
        }
        None => None,
    };

    Ok(SessionReport {
        total_scanned: stats.total(),
        rejected,
        safe: stats.status_count(ScanStatus::Safe),
        flagged: stats.status_count(ScanStatus::Flagged),
        blocked: stats.status_count(ScanStatus::Blocked),
        exported,
        store,
        history,
    })
}
