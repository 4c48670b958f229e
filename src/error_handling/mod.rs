//! Error types.
//!
//! This module provides the error enums surfaced by the library:
//! - **Scan errors**: input rejected before any analyzer runs
//! - **Catalog errors**: an indicator catalog file could not be loaded
//! - **Initialization errors**: logger setup failures
//!
//! Deleting an absent record and parsing an unknown age descriptor are not
//! errors; both resolve to defined fallbacks.

mod types;

// Re-export public API
pub use types::{CatalogError, InitializationError, ScanError};
