//! Filtering and sorting of scan history.

use std::cmp::Ordering;

use chrono::{DateTime, TimeZone, Utc};
use clap::ValueEnum;

use super::age::approximate_age_minutes;
use super::{ScanRecord, ScanStatus};

/// Status filter for the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Safe,
    Flagged,
    Blocked,
}

impl StatusFilter {
    pub fn matches(&self, status: ScanStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Safe => status == ScanStatus::Safe,
            StatusFilter::Flagged => status == ScanStatus::Flagged,
            StatusFilter::Blocked => status == ScanStatus::Blocked,
        }
    }
}

/// Sort order for the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    /// Most recent first, by approximate age
    #[default]
    Date,
    /// Subject, ascending
    Name,
    /// Status name, ascending
    Status,
    /// Threat level, most severe first
    Threat,
}

/// Filter and sort options for [`query`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub status_filter: StatusFilter,
    /// Case-insensitive substring matched against subject or type; empty disables it
    pub text_filter: String,
    pub sort_key: SortKey,
}

impl QueryOptions {
    fn matches(&self, record: &ScanRecord, needle: &str) -> bool {
        if !self.status_filter.matches(record.status()) {
            return false;
        }
        needle.is_empty()
            || record.subject().to_lowercase().contains(needle)
            || record.scan_type().as_str().contains(needle)
    }
}

/// Filters and sorts `records` relative to the current time.
pub fn query<'a, I>(records: I, options: &QueryOptions) -> Vec<&'a ScanRecord>
where
    I: IntoIterator<Item = &'a ScanRecord>,
{
    query_at(records, options, &Utc::now())
}

/// Filters and sorts `records` relative to `now`.
///
/// Records must match both the status filter and the text filter. Sorting is
/// stable, so ties keep their input order.
pub fn query_at<'a, I, Tz>(records: I, options: &QueryOptions, now: &DateTime<Tz>) -> Vec<&'a ScanRecord>
where
    I: IntoIterator<Item = &'a ScanRecord>,
    Tz: TimeZone,
{
    let needle = options.text_filter.to_lowercase();
    let mut selected: Vec<&ScanRecord> = records
        .into_iter()
        .filter(|record| options.matches(record, &needle))
        .collect();

    match options.sort_key {
        SortKey::Date => {
            let now = now.with_timezone(&Utc);
            selected.sort_by_key(|record| approximate_age_minutes(record.occurred_at(), now));
        }
        SortKey::Name => selected.sort_by(|a, b| a.subject().cmp(b.subject())),
        SortKey::Status => selected.sort_by(|a, b| a.status().as_str().cmp(b.status().as_str())),
        SortKey::Threat => selected.sort_by(|a, b| compare_threat_desc(a, b)),
    }

    selected
}

fn compare_threat_desc(a: &ScanRecord, b: &ScanRecord) -> Ordering {
    b.threat_level().severity().cmp(&a.threat_level().severity())
}
