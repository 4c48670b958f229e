//! phish_scan library: heuristic phishing risk scoring with a scan history
//!
//! This library scores URLs, emails and SMS text against an indicator catalog,
//! classifies the score as safe / warn / block, and keeps an in-memory history
//! of past scans that can be filtered, sorted, grouped by time and exported.
//!
//! # Example
//!
//! ```no_run
//! use phish_scan::analysis::{RiskEngine, ScanType};
//! use phish_scan::history::{query, QueryOptions, ScanRecordStore};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = RiskEngine::default();
//! let mut store = ScanRecordStore::new();
//!
//! let outcome = engine.scan_text("http://paypal-security.example/login", ScanType::Url)?;
//! println!("{} -> {}", outcome.subject, outcome.verdict.recommendation);
//! store.add_outcome(&outcome);
//!
//! for record in query(&store, &QueryOptions::default()) {
//!     println!("{} ({})", record.subject(), record.status());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The analyzers are synchronous and stateless; the store is single-owner.

pub mod analysis;
mod app;
pub mod catalog;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod history;
pub mod initialization;
mod run;

// Re-export public API
pub use analysis::{classify, RiskEngine, ScanInput, ScanOutcome, ScanType};
pub use catalog::IndicatorCatalog;
pub use config::{Config, LogFormat, LogLevel};
pub use history::{ScanRecord, ScanRecordStore};
pub use run::{run_session, SessionReport};
