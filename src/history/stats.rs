//! Aggregate statistics over scan history.

use std::collections::HashMap;

use strum::IntoEnumIterator;

use super::{ScanRecord, ScanStatus};
use crate::analysis::{ScanType, ThreatLevel};

/// Counts per status, scan type and threat level.
///
/// Every variant is present in the maps (zero when unseen).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStats {
    total: usize,
    by_status: HashMap<ScanStatus, usize>,
    by_type: HashMap<ScanType, usize>,
    by_threat: HashMap<ThreatLevel, usize>,
}

impl HistoryStats {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ScanRecord>,
    {
        let mut by_status: HashMap<ScanStatus, usize> = ScanStatus::iter().map(|s| (s, 0)).collect();
        let mut by_type: HashMap<ScanType, usize> = ScanType::iter().map(|t| (t, 0)).collect();
        let mut by_threat: HashMap<ThreatLevel, usize> =
            ThreatLevel::iter().map(|l| (l, 0)).collect();
        let mut total = 0;

        for record in records {
            total += 1;
            *by_status.entry(record.status()).or_default() += 1;
            *by_type.entry(record.scan_type()).or_default() += 1;
            *by_threat.entry(record.threat_level()).or_default() += 1;
        }

        Self {
            total,
            by_status,
            by_type,
            by_threat,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn status_count(&self, status: ScanStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }

    pub fn type_count(&self, scan_type: ScanType) -> usize {
        self.by_type.get(&scan_type).copied().unwrap_or(0)
    }

    pub fn threat_count(&self, level: ThreatLevel) -> usize {
        self.by_threat.get(&level).copied().unwrap_or(0)
    }

    /// Records that were flagged or blocked
    pub fn threats_detected(&self) -> usize {
        self.status_count(ScanStatus::Flagged) + self.status_count(ScanStatus::Blocked)
    }

    /// Share of records flagged or blocked, 0.0 for an empty history
    pub fn threat_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.threats_detected() as f64 / self.total as f64
    }
}
