//! Configuration types.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and for configuring a scan session programmatically.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::analysis::ScanType;
use crate::export::ExportFormat;
use crate::history::{SortKey, StatusFilter};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Session configuration (no CLI dependencies).
///
/// Describes one scan session: where inputs come from, how they are analyzed,
/// how the resulting history is presented and whether it is exported.
///
/// # Examples
///
/// ```no_run
/// use phish_scan::Config;
/// use phish_scan::analysis::ScanType;
///
/// let config = Config {
///     inputs: vec!["http://paypa1.com/login".to_string()],
///     scan_type: ScanType::Url,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Inputs given directly (each one is scanned)
    pub inputs: Vec<String>,

    /// File to read additional inputs from, one per line (`-` for stdin)
    pub file: Option<PathBuf>,

    /// Declared type of every input in this session
    pub scan_type: ScanType,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Indicator catalog JSON file (built-in catalog when absent)
    pub catalog: Option<PathBuf>,

    /// Status filter applied to the session history view
    pub status_filter: StatusFilter,

    /// Case-insensitive text filter applied to the session history view
    pub search: String,

    /// Sort order of the session history view
    pub sort: SortKey,

    /// Export format for the session history (no export when absent)
    pub export_format: Option<ExportFormat>,

    /// Export destination (stdout when absent)
    pub export_output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            file: None,
            scan_type: ScanType::Url,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            catalog: None,
            status_filter: StatusFilter::All,
            search: String::new(),
            sort: SortKey::Date,
            export_format: None,
            export_output: None,
        }
    }
}
