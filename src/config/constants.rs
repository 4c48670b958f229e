//! Configuration constants.
//!
//! This module defines the constants used by the risk engine and the history
//! views: rule weights, classifier thresholds, and the fallbacks used when a
//! relative age descriptor cannot be parsed.

// URL rule weights
/// Weight of a known-bad domain fragment match
pub const DOMAIN_IMPERSONATION_WEIGHT: u32 = 40;
/// Weight of a misspelled brand token match
pub const TYPOSQUATTING_WEIGHT: u32 = 30;
/// Weight of a URL with more than `MAX_URL_DOTS` dots
pub const SUSPICIOUS_SUBDOMAIN_WEIGHT: u32 = 20;
/// Weight of a digit anywhere after the scheme
pub const UNUSUAL_DOMAIN_PATTERN_WEIGHT: u32 = 10;
/// A URL with more dots than this is treated as a suspicious subdomain chain
pub const MAX_URL_DOTS: usize = 3;

// Content rule weights
/// Weight of each matching phishing phrase (applied once per phrase)
pub const PHISHING_PHRASE_WEIGHT: u32 = 15;
/// Weight of a "click ... here" call-to-action
pub const CALL_TO_ACTION_WEIGHT: u32 = 10;
/// Weight of a dollar amount such as "$100"
pub const MONEY_CONTENT_WEIGHT: u32 = 10;

// Classifier thresholds (inclusive lower bounds)
/// Scores at or above this value are blocked
pub const BLOCK_THRESHOLD: u32 = 50;
/// Scores at or above this value (and below `BLOCK_THRESHOLD`) produce a warning
pub const WARN_THRESHOLD: u32 = 25;

// History
/// Approximate age assigned to records whose age descriptor cannot be parsed.
/// Large enough that such records sort after every parseable one.
pub const UNPARSEABLE_AGE_MINUTES: u64 = 999_999;
/// Lookback window for the "this week" bucket
pub const THIS_WEEK_LOOKBACK_DAYS: i64 = 7;

// Input limits
/// Maximum scan input length in characters.
/// Longer inputs are rejected as invalid before any analyzer runs.
pub const MAX_INPUT_LENGTH: usize = 10_000;

/// Environment variable consulted for a catalog file path
pub const CATALOG_ENV_VAR: &str = "PHISH_SCAN_CATALOG";
