//! In-memory scan record store.
//!
//! The store is owned by a single session and is not synchronized. Hosts that
//! share it between threads must wrap `add`, `remove` and `clear` in their own
//! lock.

use log::{debug, info};

use super::{RecordId, ScanRecord};
use crate::analysis::ScanOutcome;

/// Ordered collection of past scans, oldest first.
#[derive(Debug, Clone, Default)]
pub struct ScanRecordStore {
    records: Vec<ScanRecord>,
    next_id: u64,
}

impl ScanRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record` and assigns it a fresh id.
    ///
    /// Ids increase monotonically and are never reused, even after `clear`.
    pub fn add(&mut self, mut record: ScanRecord) -> RecordId {
        self.next_id += 1;
        let id = RecordId(self.next_id);
        record.id = id;
        debug!(
            "Added record {} ({} scan, status {})",
            id,
            record.scan_type(),
            record.status()
        );
        self.records.push(record);
        id
    }

    /// Builds a record from `outcome` and appends it.
    pub fn add_outcome(&mut self, outcome: &ScanOutcome) -> RecordId {
        self.add(ScanRecord::from_outcome(outcome))
    }

    /// Deletes the record with `id`.
    ///
    /// Returns `false` and leaves the store unchanged when no such record exists.
    pub fn remove(&mut self, id: RecordId) -> bool {
        match self.records.iter().position(|r| r.id == id) {
            Some(index) => {
                self.records.remove(index);
                info!("Deleted record {}", id);
                true
            }
            None => {
                debug!("Delete requested for absent record {}", id);
                false
            }
        }
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        info!("Cleared {} record(s) from history", self.records.len());
        self.records.clear();
    }

    /// Records in insertion order.
    ///
    /// The iterator is lazy and cloneable; call `list` again to restart.
    pub fn list(&self) -> std::slice::Iter<'_, ScanRecord> {
        self.records.iter()
    }

    pub fn get(&self, id: RecordId) -> Option<&ScanRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records as a slice, for export and statistics.
    pub fn as_slice(&self) -> &[ScanRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a ScanRecordStore {
    type Item = &'a ScanRecord;
    type IntoIter = std::slice::Iter<'a, ScanRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.list()
    }
}
