//! Main application modules.
//!
//! This module provides input collection and validation plus the session
//! summary output used by the scan runner.

pub mod input;
pub mod statistics;

// Re-export public API
pub use input::{collect_inputs, prepare_input};
pub use statistics::{format_history_view, print_history_statistics};
