//! Analysis result types.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Declared type of a scan input.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum ScanType {
    /// A link, scored by the URL analyzer
    Url,
    /// An email body, scored by the content analyzer
    Email,
    /// An SMS message, scored by the content analyzer
    Sms,
}

impl ScanType {
    /// Lower-case name used in history filters and exports
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanType::Url => "url",
            ScanType::Email => "email",
            ScanType::Sms => "sms",
        }
    }
}

impl fmt::Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score and triggered indicators produced by an analyzer.
///
/// Indicators are kept in detection order. The value is immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    risk_score: u32,
    threat_indicators: Vec<String>,
}

impl AnalysisResult {
    pub(crate) fn new(risk_score: u32, threat_indicators: Vec<String>) -> Self {
        Self {
            risk_score,
            threat_indicators,
        }
    }

    /// Sum of the weights of every triggered rule
    pub fn risk_score(&self) -> u32 {
        self.risk_score
    }

    /// Human-readable indicators, one per triggered rule match
    pub fn threat_indicators(&self) -> &[String] {
        &self.threat_indicators
    }

    /// True when `indicator` was emitted
    pub fn has_indicator(&self, indicator: &str) -> bool {
        self.threat_indicators.iter().any(|i| i == indicator)
    }
}
