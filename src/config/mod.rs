//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (rule weights, classifier thresholds, age sentinels)
//! - Logging and library configuration types

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
