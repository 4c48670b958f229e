// Shared test helpers for building scan histories.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use chrono::{DateTime, TimeZone, Utc};

use phish_scan::analysis::ScanType;
use phish_scan::history::{ScanRecord, ScanRecordStore};

/// Fixed reference time used by history tests (a Friday afternoon, UTC).
#[allow(dead_code)] // Used by other test files
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 15, 0, 0).unwrap()
}

/// Builds a store from `(subject, type, score, age)` tuples, in order.
pub fn store_from(entries: &[(&str, ScanType, u32, &str)]) -> ScanRecordStore {
    let mut store = ScanRecordStore::new();
    for (subject, scan_type, score, age) in entries {
        store.add(ScanRecord::new(*subject, *scan_type, *score, *age));
    }
    store
}

/// A mixed history covering every status, type and time bucket.
#[allow(dead_code)] // Used by other test files
pub fn mixed_history() -> ScanRecordStore {
    store_from(&[
        ("https://paypal-verify.example", ScanType::Url, 50, "10 min ago"),
        ("Lunch at noon?", ScanType::Sms, 0, "30 min ago"),
        ("Final notice: update your payment", ScanType::Email, 45, "3 hours ago"),
        ("https://docs.rs", ScanType::Url, 0, "1 day ago"),
        ("You have won $500, click here", ScanType::Sms, 60, "2 days ago"),
        ("http://g00gle.com", ScanType::Url, 40, "2 months ago"),
    ])
}

/// Subjects of `records`, in order.
#[allow(dead_code)] // Used by other test files
pub fn subjects<'a>(records: impl IntoIterator<Item = &'a ScanRecord>) -> Vec<String> {
    records.into_iter().map(|r| r.subject().to_string()).collect()
}
