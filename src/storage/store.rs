//! In-memory record store.
//!
//! [`RecordStore`] is the working set of the admin table: an ordered sequence
//! of records in fetch order. It is replaced wholesale on load and mutated in
//! place by edits and deletions. Nothing is persisted.

use crate::domain::{Record, RecordId};
use std::collections::BTreeSet;

/// Ordered, in-memory sequence of records.
///
/// Record ids are expected to be unique; when the payload violates this,
/// lookups resolve to the first record with the id while deletes remove every
/// record carrying it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    #[must_use]
    pub const fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Replaces the store contents wholesale.
    pub fn load(&mut self, records: Vec<Record>) {
        tracing::debug!(count = records.len(), "record store loaded");
        self.records = records;
    }

    /// Removes the record with `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: &RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| &record.id != id);
        let removed = before != self.records.len();
        tracing::debug!(id = %id, removed, "record delete");
        removed
    }

    /// Removes every record whose id is in `ids`. Returns how many were removed.
    pub fn delete_many(&mut self, ids: &BTreeSet<RecordId>) -> usize {
        if ids.is_empty() {
            return 0;
        }
        let before = self.records.len();
        self.records.retain(|record| !ids.contains(&record.id));
        let removed = before - self.records.len();
        tracing::debug!(requested = ids.len(), removed, "bulk record delete");
        removed
    }

    /// Replaces the record matching `id` with `patch`.
    ///
    /// The patch's id is forced to `id`. Returns `false` (and changes nothing)
    /// when no record matches.
    pub fn update(&mut self, id: &RecordId, mut patch: Record) -> bool {
        let Some(slot) = self.records.iter_mut().find(|record| &record.id == id) else {
            tracing::debug!(id = %id, "update skipped, record not found");
            return false;
        };
        patch.id = id.clone();
        *slot = patch;
        tracing::debug!(id = %id, "record updated");
        true
    }

    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|record| &record.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &RecordId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
