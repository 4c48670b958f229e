//! Session summary logging.

use log::info;
use strum::IntoEnumIterator;

use crate::analysis::{ScanType, ThreatLevel};
use crate::history::{HistoryStats, HistoryView, ScanStatus};

/// Logs status, type and threat counts for the session history.
pub fn print_history_statistics(stats: &HistoryStats) {
    info!(
        "History: {} scan{} ({} threat{} detected, {:.0}%)",
        stats.total(),
        if stats.total() == 1 { "" } else { "s" },
        stats.threats_detected(),
        if stats.threats_detected() == 1 { "" } else { "s" },
        stats.threat_ratio() * 100.0
    );

    if stats.total() == 0 {
        return;
    }

    info!("Status Counts:");
    for status in ScanStatus::iter() {
        let count = stats.status_count(status);
        if count > 0 {
            info!("   {}: {}", status, count);
        }
    }

    info!("Type Counts:");
    for scan_type in ScanType::iter() {
        let count = stats.type_count(scan_type);
        if count > 0 {
            info!("   {}: {}", scan_type, count);
        }
    }

    info!("Threat Level Counts:");
    for level in ThreatLevel::iter() {
        let count = stats.threat_count(level);
        if count > 0 {
            info!("   {}: {}", level, count);
        }
    }
}

/// Renders a grouped history view, one section per bucket.
pub fn format_history_view(view: &HistoryView<'_>) -> String {
    let mut out = String::new();
    for group in view.groups() {
        out.push_str(group.bucket.label());
        out.push('\n');
        for record in &group.records {
            out.push_str(&format!(
                "  [{}] {} ({} scan, {} risk) {}\n",
                record.status(),
                record.subject(),
                record.scan_type(),
                record.threat_level(),
                record.occurred_at()
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{history_view_at, QueryOptions, ScanRecord, ScanRecordStore};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_format_history_view_sections() {
        let mut store = ScanRecordStore::new();
        store.add(ScanRecord::new("http://paypa1.com", ScanType::Url, 40, "5 min ago"));
        store.add(ScanRecord::new("hello", ScanType::Sms, 0, "2 days ago"));
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let view = history_view_at(&store, &QueryOptions::default(), &now);

        assert_eq!(
            format_history_view(&view),
            "Today\n  [flagged] http://paypa1.com (url scan, medium risk) 5 min ago\n\
             This Week\n  [safe] hello (sms scan, low risk) 2 days ago\n"
        );
    }

    #[test]
    fn test_format_empty_view() {
        assert_eq!(format_history_view(&HistoryView::default()), "");
    }

    #[test]
    fn test_print_history_statistics_does_not_panic() {
        print_history_statistics(&HistoryStats::from_records(&Vec::<ScanRecord>::new()));
        let records = [ScanRecord::new("x", ScanType::Email, 60, "1 min ago")];
        print_history_statistics(&HistoryStats::from_records(&records));
    }
}
