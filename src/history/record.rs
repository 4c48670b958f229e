//! Scan record types.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use strum_macros::EnumIter;

use crate::analysis::{classify, Recommendation, ScanOutcome, ScanType, ThreatLevel};

/// Identifier assigned by the store when a record is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status shown in the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    Safe,
    Flagged,
    Blocked,
}

impl ScanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanStatus::Safe => "safe",
            ScanStatus::Flagged => "flagged",
            ScanStatus::Blocked => "blocked",
        }
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Recommendation> for ScanStatus {
    fn from(recommendation: Recommendation) -> Self {
        match recommendation {
            Recommendation::Safe => ScanStatus::Safe,
            Recommendation::Warn => ScanStatus::Flagged,
            Recommendation::Block => ScanStatus::Blocked,
        }
    }
}

/// When a scan happened.
///
/// Records produced by the engine carry an absolute timestamp. Records handed
/// over by a host may only carry a relative descriptor such as "5 min ago";
/// those are interpreted leniently by the history views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OccurredAt {
    At(DateTime<Utc>),
    Relative(String),
}

impl fmt::Display for OccurredAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OccurredAt::At(ts) => f.write_str(&ts.to_rfc3339_opts(SecondsFormat::Secs, true)),
            OccurredAt::Relative(age) => f.write_str(age),
        }
    }
}

impl From<DateTime<Utc>> for OccurredAt {
    fn from(ts: DateTime<Utc>) -> Self {
        OccurredAt::At(ts)
    }
}

impl From<&str> for OccurredAt {
    fn from(age: &str) -> Self {
        OccurredAt::Relative(age.to_string())
    }
}

/// One past scan as kept in the history.
///
/// Status and threat level are derived together from the risk score when the
/// record is built and cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanRecord {
    pub(crate) id: RecordId,
    subject: String,
    #[serde(rename = "type")]
    scan_type: ScanType,
    risk_score: u32,
    threat_level: ThreatLevel,
    status: ScanStatus,
    occurred_at: OccurredAt,
}

impl ScanRecord {
    /// Builds a record, deriving status and threat level from `risk_score`.
    ///
    /// The id stays at its default until the record is added to a store.
    pub fn new(
        subject: impl Into<String>,
        scan_type: ScanType,
        risk_score: u32,
        occurred_at: impl Into<OccurredAt>,
    ) -> Self {
        let verdict = classify(risk_score);
        Self {
            id: RecordId::default(),
            subject: subject.into(),
            scan_type,
            risk_score,
            threat_level: verdict.threat_level,
            status: verdict.recommendation.into(),
            occurred_at: occurred_at.into(),
        }
    }

    /// Builds a record from a completed scan.
    pub fn from_outcome(outcome: &ScanOutcome) -> Self {
        Self::new(
            outcome.subject.clone(),
            outcome.scan_type(),
            outcome.risk_score(),
            outcome.scanned_at,
        )
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn scan_type(&self) -> ScanType {
        self.scan_type
    }

    pub fn risk_score(&self) -> u32 {
        self.risk_score
    }

    pub fn threat_level(&self) -> ThreatLevel {
        self.threat_level
    }

    pub fn status(&self) -> ScanStatus {
        self.status
    }

    pub fn occurred_at(&self) -> &OccurredAt {
        &self.occurred_at
    }
}
