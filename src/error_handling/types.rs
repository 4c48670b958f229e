//! Error type definitions.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error loading the indicator catalog during startup.
    #[error("Catalog initialization error: {0}")]
    CatalogError(#[from] CatalogError),
}

/// Errors raised when a scan request is rejected.
///
/// Analyzers never fail; the only validation boundary is whether there is any
/// input at all (and whether it is within the length limit).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The submitted text was empty or whitespace only.
    #[error("Invalid input: scan text is empty")]
    EmptyInput,

    /// The submitted text exceeded the maximum input length.
    #[error("Invalid input: scan text is {length} characters (maximum {max})")]
    InputTooLong {
        /// Length of the rejected input in characters
        length: usize,
        /// Maximum accepted length
        max: usize,
    },
}

/// Errors raised while loading an indicator catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        /// Path of the catalog file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The catalog JSON could not be decoded.
    #[error("Failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Every indicator list in the catalog was empty.
    #[error("Catalog contains no indicators")]
    Empty,
}
