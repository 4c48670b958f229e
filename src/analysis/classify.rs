//! Recommendation classifier.

use std::fmt;

use serde::Serialize;
use strum_macros::EnumIter;

use crate::config::{BLOCK_THRESHOLD, WARN_THRESHOLD};

/// Action recommended to the user for a scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Safe,
    Warn,
    Block,
}

/// Coarse threat level shown next to a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
}

/// Recommendation and threat level derived from one risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub recommendation: Recommendation,
    pub threat_level: ThreatLevel,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Safe => "safe",
            Recommendation::Warn => "warn",
            Recommendation::Block => "block",
        }
    }
}

impl ThreatLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatLevel::Low => "low",
            ThreatLevel::Medium => "medium",
            ThreatLevel::High => "high",
        }
    }

    /// Sort weight used by the history view (higher is more severe).
    pub fn severity(&self) -> u8 {
        match self {
            ThreatLevel::Low => 1,
            ThreatLevel::Medium => 2,
            ThreatLevel::High => 3,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a risk score to a verdict.
///
/// Thresholds are inclusive lower bounds: 50 and above blocks, 25 to 49 warns,
/// anything below 25 is safe.
pub fn classify(risk_score: u32) -> Verdict {
    if risk_score >= BLOCK_THRESHOLD {
        Verdict {
            recommendation: Recommendation::Block,
            threat_level: ThreatLevel::High,
        }
    } else if risk_score >= WARN_THRESHOLD {
        Verdict {
            recommendation: Recommendation::Warn,
            threat_level: ThreatLevel::Medium,
        }
    } else {
        Verdict {
            recommendation: Recommendation::Safe,
            threat_level: ThreatLevel::Low,
        }
    }
}
