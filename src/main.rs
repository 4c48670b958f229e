//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `phish_scan` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use phish_scan::analysis::ScanType;
use phish_scan::config::CATALOG_ENV_VAR;
use phish_scan::export::ExportFormat;
use phish_scan::history::{SortKey, StatusFilter};
use phish_scan::initialization::init_logger_with;
use phish_scan::{run_session, Config, LogFormat, LogLevel};

#[derive(Debug, Parser)]
#[command(
    name = "phish_scan",
    version,
    about = "Scores URLs, emails and SMS text for phishing risk."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Scan inputs and print a risk summary
    Scan(ScanCommand),
}

#[derive(Debug, Args)]
struct ScanCommand {
    /// Texts to scan (URLs, email bodies or SMS messages)
    inputs: Vec<String>,

    /// File with one input per line (`-` for stdin)
    #[arg(long, short)]
    file: Option<PathBuf>,

    /// Declared type of every input: url|email|sms
    #[arg(long = "type", short = 't', value_enum, default_value_t = ScanType::Url)]
    scan_type: ScanType,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,

    /// Indicator catalog JSON file (built-in catalog when omitted)
    #[arg(long, env = CATALOG_ENV_VAR)]
    catalog: Option<PathBuf>,

    /// Only show history entries with this status
    #[arg(long, value_enum, default_value_t = StatusFilter::All)]
    status: StatusFilter,

    /// Only show history entries whose subject or type contains this text
    #[arg(long, default_value = "")]
    search: String,

    /// History sort order: date|name|status|threat
    #[arg(long, value_enum, default_value_t = SortKey::Date)]
    sort: SortKey,

    /// Export the filtered history: csv|json|text
    #[arg(long, value_enum)]
    export: Option<ExportFormat>,

    /// Export destination (stdout when omitted)
    #[arg(long, requires = "export")]
    output: Option<PathBuf>,
}

impl From<ScanCommand> for Config {
    fn from(cmd: ScanCommand) -> Self {
        Config {
            inputs: cmd.inputs,
            file: cmd.file,
            scan_type: cmd.scan_type,
            log_level: cmd.log_level,
            log_format: cmd.log_format,
            catalog: cmd.catalog,
            status_filter: cmd.status,
            search: cmd.search,
            sort: cmd.sort,
            export_format: cmd.export,
            export_output: cmd.output,
        }
    }
}

fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // Try the current directory first, then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();
    let Command::Scan(cmd) = cli.command;
    let config = Config::from(cmd);

    if config.inputs.is_empty() && config.file.is_none() {
        eprintln!("phish_scan error: no inputs given (pass texts or --file)");
        process::exit(2);
    }

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let exporting_to_stdout = config.export_format.is_some() && config.export_output.is_none();

    match run_session(config) {
        Ok(report) => {
            // Keep stdout clean for piped exports
            let print = |line: &str| {
                if exporting_to_stdout {
                    eprintln!("{}", line);
                } else {
                    println!("{}", line);
                }
            };
            print(&format!(
                "✅ Scanned {} input{} ({} safe, {} flagged, {} blocked, {} rejected)",
                report.total_scanned,
                if report.total_scanned == 1 { "" } else { "s" },
                report.safe,
                report.flagged,
                report.blocked,
                report.rejected
            ));
            if !report.history.is_empty() {
                print(report.history.trim_end());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("phish_scan error: {:#}", e);
            process::exit(1);
        }
    }
}
