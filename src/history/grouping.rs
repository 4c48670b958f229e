//! Time-bucketed history views.

use std::fmt;

use chrono::{DateTime, Local, TimeDelta, TimeZone};
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use super::age::reconstruct_timestamp;
use super::query::{query_at, QueryOptions};
use super::{OccurredAt, ScanRecord};
use crate::config::THIS_WEEK_LOOKBACK_DAYS;

/// Coarse time bucket of a scan, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum TimeBucket {
    Today,
    Yesterday,
    ThisWeek,
    Older,
}

impl TimeBucket {
    /// Section heading for the bucket
    pub fn label(&self) -> &'static str {
        match self {
            TimeBucket::Today => "Today",
            TimeBucket::Yesterday => "Yesterday",
            TimeBucket::ThisWeek => "This Week",
            TimeBucket::Older => "Older",
        }
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Picks the bucket for a scan time relative to `now`.
///
/// Calendar days are compared in `now`'s time zone. Anything that is neither
/// today nor yesterday but falls within the lookback window is "this week".
pub fn bucket_for<Tz: TimeZone>(occurred: &OccurredAt, now: &DateTime<Tz>) -> TimeBucket {
    let Some(when) = reconstruct_timestamp(occurred, now) else {
        return TimeBucket::Older;
    };
    let today = now.date_naive();
    let day = when.date_naive();

    if day == today {
        return TimeBucket::Today;
    }
    if today.pred_opt() == Some(day) {
        return TimeBucket::Yesterday;
    }
    let week_ago = TimeDelta::try_days(THIS_WEEK_LOOKBACK_DAYS)
        .and_then(|lookback| now.clone().checked_sub_signed(lookback));
    match week_ago {
        Some(week_ago) if when > week_ago => TimeBucket::ThisWeek,
        _ => TimeBucket::Older,
    }
}

/// Records of one bucket, in query order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryGroup<'a> {
    pub bucket: TimeBucket,
    pub records: Vec<&'a ScanRecord>,
}

/// Filtered, sorted and bucketed projection of the history.
///
/// Borrows the records; recompute it after the store changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryView<'a> {
    groups: Vec<HistoryGroup<'a>>,
}

impl<'a> HistoryView<'a> {
    /// Non-empty groups in bucket order
    pub fn groups(&self) -> &[HistoryGroup<'a>] {
        &self.groups
    }

    /// Records of `bucket` (empty when the bucket has none)
    pub fn bucket(&self, bucket: TimeBucket) -> &[&'a ScanRecord] {
        self.groups
            .iter()
            .find(|g| g.bucket == bucket)
            .map(|g| g.records.as_slice())
            .unwrap_or(&[])
    }

    /// All records, bucket by bucket
    pub fn records(&self) -> impl Iterator<Item = &'a ScanRecord> + '_ {
        self.groups.iter().flat_map(|g| g.records.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Buckets already filtered and sorted records, keeping their relative order.
pub fn group_records<'a, Tz: TimeZone>(records: &[&'a ScanRecord], now: &DateTime<Tz>) -> HistoryView<'a> {
    let buckets: Vec<TimeBucket> = records
        .iter()
        .map(|record| bucket_for(record.occurred_at(), now))
        .collect();

    let groups = TimeBucket::iter()
        .filter_map(|bucket| {
            let members: Vec<&ScanRecord> = records
                .iter()
                .zip(&buckets)
                .filter(|(_, b)| **b == bucket)
                .map(|(record, _)| *record)
                .collect();
            (!members.is_empty()).then_some(HistoryGroup {
                bucket,
                records: members,
            })
        })
        .collect();

    HistoryView { groups }
}

/// Filters, sorts and buckets `records` relative to the local current time.
pub fn history_view<'a, I>(records: I, options: &QueryOptions) -> HistoryView<'a>
where
    I: IntoIterator<Item = &'a ScanRecord>,
{
    history_view_at(records, options, &Local::now())
}

/// Filters, sorts and buckets `records` relative to `now`.
pub fn history_view_at<'a, I, Tz>(records: I, options: &QueryOptions, now: &DateTime<Tz>) -> HistoryView<'a>
where
    I: IntoIterator<Item = &'a ScanRecord>,
    Tz: TimeZone,
{
    let selected = query_at(records, options, now);
    group_records(&selected, now)
}
