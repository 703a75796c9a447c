//! View filter and search input state.
//!
//! [`SearchState`] separates what the operator typed (`input`) from the query
//! the table is filtered by (`query`). In [`SearchMode::Live`] the two move
//! together; in [`SearchMode::Deferred`] the query only catches up on submit.
//!
//! Matching is a case-insensitive substring test over every field value of a
//! record, see [`Record::matches`](crate::domain::Record::matches).

use super::modes::SearchMode;
use crate::storage::RecordStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    mode: SearchMode,
    input: String,
    query: String,
}

impl SearchState {
    #[must_use]
    pub fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Text currently in the search box.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Query the table is filtered by.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the search box holds text not yet applied to the table.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.input != self.query
    }

    /// Replaces the search box contents.
    ///
    /// Returns `true` when the committed query changed, which only happens in
    /// live mode.
    pub fn set_input(&mut self, text: &str) -> bool {
        self.input.clear();
        self.input.push_str(text);
        match self.mode {
            SearchMode::Live => self.commit(),
            SearchMode::Deferred => false,
        }
    }

    /// Commits the search box (Enter). Returns `true` when the query changed.
    pub fn submit(&mut self) -> bool {
        self.commit()
    }

    /// Flips between live and deferred input.
    ///
    /// Leaving live mode commits the box so the visible results stay put.
    /// Entering live mode waits for the next keystroke. Returns `true` when
    /// the query changed.
    pub fn toggle_mode(&mut self) -> bool {
        let previous = self.mode;
        self.mode = previous.toggled();
        tracing::debug!(from = ?previous, to = ?self.mode, "search mode toggled");
        match previous {
            SearchMode::Live => self.commit(),
            SearchMode::Deferred => false,
        }
    }

    fn commit(&mut self) -> bool {
        if self.query == self.input {
            return false;
        }
        self.query.clone_from(&self.input);
        true
    }

    /// Lowercased query, computed once per filter pass.
    #[must_use]
    pub fn needle(&self) -> String {
        self.query.to_lowercase()
    }

    /// Indices into `store` of the records matching the committed query, in
    /// store order.
    #[must_use]
    pub fn filter(&self, store: &RecordStore) -> Vec<usize> {
        let needle = self.needle();
        store
            .iter()
            .enumerate()
            .filter(|(_, record)| record.matches(&needle))
            .map(|(idx, _)| idx)
            .collect()
    }
}

/// Byte ranges of `text` that case-insensitively match `needle_lower`.
///
/// Ranges never overlap. Text whose lowercase form changes byte length is not
/// highlighted.
#[must_use]
pub fn highlight_ranges(text: &str, needle_lower: &str) -> Vec<(usize, usize)> {
    if needle_lower.is_empty() {
        return Vec::new();
    }
    let lowered = text.to_lowercase();
    if lowered.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(offset) = lowered[from..].find(needle_lower) {
        let start = from + offset;
        let end = start + needle_lower.len();
        ranges.push((start, end));
        from = end;
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Record;

    fn store() -> RecordStore {
        let mut store = RecordStore::new();
        store.load(vec![
            Record::new("1", "Ann", "ann@x.io", "admin"),
            Record::new("2", "Bob", "bob@x.io", "member"),
            Record::new("3", "Cid", "cid@x.io", "member"),
        ]);
        store
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        let search = SearchState::default();
        assert_eq!(search.filter(&store()), vec![0, 1, 2]);
    }

    #[test]
    fn live_input_commits_immediately() {
        let mut search = SearchState::new(SearchMode::Live);
        assert!(search.set_input("Bo"));
        assert_eq!(search.query(), "Bo");
        assert_eq!(search.filter(&store()), vec![1]);
        assert!(!search.set_input("Bo"));

        // "member" carries a b too.
        assert!(search.set_input("b"));
        assert_eq!(search.filter(&store()), vec![1, 2]);
    }

    #[test]
    fn deferred_input_waits_for_submit() {
        let mut search = SearchState::new(SearchMode::Deferred);
        assert!(!search.set_input("member"));
        assert!(search.has_pending());
        assert_eq!(search.filter(&store()).len(), 3);

        assert!(search.submit());
        assert!(!search.has_pending());
        assert_eq!(search.filter(&store()), vec![1, 2]);
        assert!(!search.submit());
    }

    #[test]
    fn switching_to_deferred_keeps_visible_results() {
        let mut search = SearchState::new(SearchMode::Live);
        search.set_input("ann");
        search.toggle_mode();
        assert_eq!(search.mode(), SearchMode::Deferred);
        assert_eq!(search.query(), "ann");
    }

    #[test]
    fn switching_to_live_does_not_commit_pending_text() {
        let mut search = SearchState::new(SearchMode::Deferred);
        search.set_input("cid");
        assert!(!search.toggle_mode());
        assert_eq!(search.query(), "");

        assert!(search.set_input("cid"));
        assert_eq!(search.query(), "cid");
    }

    #[test]
    fn highlight_finds_every_occurrence() {
        assert_eq!(highlight_ranges("Bob Bobson", "bob"), vec![(0, 3), (4, 7)]);
        assert_eq!(highlight_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert!(highlight_ranges("Ann", "").is_empty());
    }
}
