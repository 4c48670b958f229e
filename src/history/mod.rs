//! Scan history: record store, filtered views, time buckets and statistics.
//!
//! The store owns the records. Everything else here is a read-only projection
//! recomputed on demand:
//! - `query` filters by status and text, then sorts
//! - `history_view` additionally groups into today / yesterday / this week / older
//! - `HistoryStats` aggregates counts
//!
//! Scan times may be relative descriptors ("5 min ago"). Those are parsed
//! leniently; unparseable values fall back to fixed sentinels and never fail.

mod age;
mod grouping;
mod query;
mod record;
mod stats;
mod store;

pub use grouping::{
    bucket_for, group_records, history_view, history_view_at, HistoryGroup, HistoryView,
    TimeBucket,
};
pub use query::{query, query_at, QueryOptions, SortKey, StatusFilter};
pub use record::{OccurredAt, RecordId, ScanRecord, ScanStatus};
pub use stats::HistoryStats;
pub use store::ScanRecordStore;
