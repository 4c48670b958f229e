//! Lenient interpretation of scan ages.
//!
//! Relative descriptors look like "5 min ago", "2 hours ago" or "3 days ago".
//! Anything that does not parse falls back to a fixed sentinel instead of
//! failing, so a history list can always be rendered.

use chrono::{DateTime, Months, TimeDelta, TimeZone, Utc};

use super::OccurredAt;
use crate::config::UNPARSEABLE_AGE_MINUTES;

/// Unit token of a relative descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AgeUnit {
    Minute,
    Hour,
    Day,
    Month,
    Unknown,
}

/// Splits "N unit ..." (or "Nunit ...") into its count and unit.
/// `None` when the descriptor does not start with a number.
fn parse_relative(age: &str) -> Option<(u64, AgeUnit)> {
    let mut parts = age.split_whitespace();
    let first = parts.next()?;
    let digits_end = first
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(first.len());
    let count = first[..digits_end].parse::<u64>().ok()?;
    let unit = match &first[digits_end..] {
        "" => parts.next().unwrap_or(""),
        attached => attached,
    }
    .to_lowercase();
    let unit = if unit.starts_with("min") {
        AgeUnit::Minute
    } else if unit.starts_with("hour") {
        AgeUnit::Hour
    } else if unit.starts_with("day") {
        AgeUnit::Day
    } else if unit.starts_with("month") {
        AgeUnit::Month
    } else {
        AgeUnit::Unknown
    };
    Some((count, unit))
}

/// Approximate age in minutes used by the date sort.
///
/// Only minute and hour descriptors are understood; everything else (days,
/// months, free text) maps to `UNPARSEABLE_AGE_MINUTES`.
pub(crate) fn approximate_age_minutes(occurred: &OccurredAt, now: DateTime<Utc>) -> u64 {
    match occurred {
        OccurredAt::At(ts) => u64::try_from((now - *ts).num_minutes()).unwrap_or(0),
        OccurredAt::Relative(age) => match parse_relative(age) {
            Some((count, AgeUnit::Minute)) => count,
            Some((count, AgeUnit::Hour)) => count.saturating_mul(60),
            _ => UNPARSEABLE_AGE_MINUTES,
        },
    }
}

/// Reconstructs an absolute time for grouping.
///
/// Minute, hour, day and month descriptors are subtracted from `now`; unknown
/// units and unparseable descriptors are treated as `now`. Returns `None` only
/// when the subtraction leaves the representable date range.
pub(crate) fn reconstruct_timestamp<Tz: TimeZone>(
    occurred: &OccurredAt,
    now: &DateTime<Tz>,
) -> Option<DateTime<Tz>> {
    let age = match occurred {
        OccurredAt::At(ts) => return Some(ts.with_timezone(&now.timezone())),
        OccurredAt::Relative(age) => age,
    };
    let Some((count, unit)) = parse_relative(age) else {
        return Some(now.clone());
    };
    let count = i64::try_from(count).ok()?;
    match unit {
        AgeUnit::Minute => now.clone().checked_sub_signed(TimeDelta::try_minutes(count)?),
        AgeUnit::Hour => now.clone().checked_sub_signed(TimeDelta::try_hours(count)?),
        AgeUnit::Day => now.clone().checked_sub_signed(TimeDelta::try_days(count)?),
        AgeUnit::Month => {
            let months = u32::try_from(count).ok()?;
            now.clone().checked_sub_months(Months::new(months))
        }
        AgeUnit::Unknown => Some(now.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn rel(age: &str) -> OccurredAt {
        OccurredAt::Relative(age.to_string())
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_sort_age_minutes_and_hours() {
        assert_eq!(approximate_age_minutes(&rel("5 min ago"), now()), 5);
        assert_eq!(approximate_age_minutes(&rel("12 mins ago"), now()), 12);
        assert_eq!(approximate_age_minutes(&rel("1 hour ago"), now()), 60);
        assert_eq!(approximate_age_minutes(&rel("3 hours ago"), now()), 180);
    }

    #[test]
    fn test_sort_age_compact_descriptors() {
        assert_eq!(approximate_age_minutes(&rel("5min ago"), now()), 5);
        assert_eq!(approximate_age_minutes(&rel("2hours ago"), now()), 120);
        assert_eq!(approximate_age_minutes(&rel("3days ago"), now()), UNPARSEABLE_AGE_MINUTES);
        assert_eq!(
            reconstruct_timestamp(&rel("2days ago"), &now()),
            Some(now() - TimeDelta::days(2))
        );
    }

    #[test]
    fn test_sort_age_unparseable_uses_sentinel() {
        for age in ["2 days ago", "1 month ago", "Just now", "", "yesterday", "-5 min ago"] {
            assert_eq!(
                approximate_age_minutes(&rel(age), now()),
                UNPARSEABLE_AGE_MINUTES,
                "{age}"
            );
        }
    }

    #[test]
    fn test_sort_age_absolute_timestamp() {
        let ts = now() - TimeDelta::minutes(90);
        assert_eq!(approximate_age_minutes(&OccurredAt::At(ts), now()), 90);
        // Future timestamps clamp to zero
        let future = now() + TimeDelta::minutes(10);
        assert_eq!(approximate_age_minutes(&OccurredAt::At(future), now()), 0);
    }

    #[test]
    fn test_reconstruct_relative_units() {
        let n = now();
        assert_eq!(
            reconstruct_timestamp(&rel("30 min ago"), &n),
            Some(n - TimeDelta::minutes(30))
        );
        assert_eq!(
            reconstruct_timestamp(&rel("2 hours ago"), &n),
            Some(n - TimeDelta::hours(2))
        );
        assert_eq!(
            reconstruct_timestamp(&rel("1 day ago"), &n),
            Some(n - TimeDelta::days(1))
        );
        assert_eq!(
            reconstruct_timestamp(&rel("4 days ago"), &n),
            Some(n - TimeDelta::days(4))
        );
        assert_eq!(
            reconstruct_timestamp(&rel("1 month ago"), &n),
            Some(Utc.with_ymd_and_hms(2024, 2, 15, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_reconstruct_unknown_defaults_to_now() {
        let n = now();
        assert_eq!(reconstruct_timestamp(&rel("3 weeks ago"), &n), Some(n));
        assert_eq!(reconstruct_timestamp(&rel("Just now"), &n), Some(n));
        assert_eq!(reconstruct_timestamp(&rel(""), &n), Some(n));
    }

    #[test]
    fn test_reconstruct_out_of_range() {
        let n = now();
        assert_eq!(
            reconstruct_timestamp(&rel("99999999999999 days ago"), &n),
            None
        );
    }

    #[test]
    fn test_reconstruct_absolute_passthrough() {
        let ts = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(reconstruct_timestamp(&OccurredAt::At(ts), &now()), Some(ts));
    }
}
