//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared session resources:
//! - Logger (plain or JSON output)
//! - Indicator catalog (built-in or loaded from a JSON file)
//!
//! All initialization functions return proper error types for error handling.

mod catalog;
mod logger;

// Re-export public API
pub use catalog::init_catalog;
pub use logger::init_logger_with;
