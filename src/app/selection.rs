//! Selection tracker for bulk actions.
//!
//! Membership is keyed by [`RecordId`], so a selection survives filtering and
//! paging. Deleting a record from any path must prune it from the set.

use crate::domain::RecordId;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    ids: BTreeSet<RecordId>,
}

impl SelectionTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ids: BTreeSet::new(),
        }
    }

    /// Adds `id` if absent, removes it if present. Returns the new membership.
    pub fn toggle(&mut self, id: &RecordId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    /// Selects every id in `ids`, or deselects them all when every one is
    /// already selected. Returns `false` for an empty input.
    pub fn toggle_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a RecordId>) -> bool {
        let ids: Vec<&RecordId> = ids.into_iter().collect();
        if ids.is_empty() {
            return false;
        }
        if ids.iter().all(|id| self.ids.contains(*id)) {
            for id in ids {
                self.ids.remove(id);
            }
        } else {
            self.ids.extend(ids.into_iter().cloned());
        }
        true
    }

    #[must_use]
    pub fn contains(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Empties the set and returns what it held.
    pub fn take(&mut self) -> BTreeSet<RecordId> {
        std::mem::take(&mut self.ids)
    }

    /// Drops ids for which `exists` is false. Returns how many were dropped.
    pub fn prune(&mut self, exists: impl Fn(&RecordId) -> bool) -> usize {
        let before = self.ids.len();
        self.ids.retain(|id| exists(id));
        before - self.ids.len()
    }
}
