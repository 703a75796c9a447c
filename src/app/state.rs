//! Application state management and view model computation.
//!
//! [`AppState`] is the single owner of everything the admin table mutates:
//! the record store, the search query, the current page, the selection set,
//! the edit draft and the load status. The reducer in
//! [`handler`](super::handler) is the only code that changes it.
//!
//! # Derived state
//!
//! `filtered` holds indices into the store of the records passing the
//! committed query. It is recomputed after every change to the store or the
//! query, so reads (`current_page_rows`, `page_count`, the view model) never
//! filter on their own.
//!
//! # Example
//!
//! ```rust
//! use adminui::app::AppState;
//! use adminui::domain::Record;
//! use adminui::ui::Theme;
//!
//! let mut state = AppState::new(10, Theme::default());
//! state.finish_load(vec![Record::new("1", "Ann", "ann@x.io", "admin")]);
//! assert_eq!(state.total_count(), 1);
//! assert_eq!(state.page_count(), 1);
//! let viewmodel = state.compute_viewmodel(30, 100);
//! assert_eq!(viewmodel.rows.len(), 1);
//! ```

use super::editor::RowEditor;
use super::modes::SearchMode;
use super::pagination::Paginator;
use super::search::{highlight_ranges, SearchState};
use super::selection::SelectionTracker;
use crate::domain::{Record, RecordId};
use crate::storage::RecordStore;
use crate::ui::components::{CHECKBOX_WIDTH, COLUMN_GAP};
use crate::ui::helpers::fit_cell;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Cell, ColumnWidths, EmptyState, FooterInfo, HeaderInfo, PaginationView, RowView,
    SearchBarInfo, StatusInfo, TableViewModel,
};
use chrono::{DateTime, Local};

/// Where the startup load stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// A `LoadRecords` request is in flight.
    Loading,
    Loaded {
        at: DateTime<Local>,
        count: usize,
    },
    /// The last load failed; the table stays empty until a retry succeeds.
    Failed { reason: String },
}

/// Rows of the frame not available to table rows.
const CHROME_ROWS: usize = 13;
const ID_WIDTH: usize = 6;
const ROLE_WIDTH: usize = 10;
/// Room kept free for the `(editing)` marker.
const MARKER_RESERVE: usize = 10;
const MIN_FLEX_WIDTH: usize = 8;
/// Most page numbers drawn at once.
const PAGE_WINDOW: usize = 7;

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: RecordStore,
    pub search: SearchState,
    pub paginator: Paginator,
    pub editor: RowEditor,
    pub selection: SelectionTracker,
    pub load: LoadStatus,
    pub theme: Theme,

    /// Store indices matching the committed query, in store order.
    filtered: Vec<usize>,
}

impl AppState {
    /// Creates an empty state waiting for its first load.
    #[must_use]
    pub fn new(page_size: usize, theme: Theme) -> Self {
        Self {
            store: RecordStore::new(),
            search: SearchState::new(SearchMode::Live),
            paginator: Paginator::new(page_size),
            editor: RowEditor::new(),
            selection: SelectionTracker::new(),
            load: LoadStatus::Loading,
            theme,
            filtered: Vec::new(),
        }
    }

    /// Installs a freshly loaded record list.
    ///
    /// Selection and draft refer to the previous list, so both are dropped.
    pub fn finish_load(&mut self, records: Vec<Record>) {
        let count = records.len();
        self.store.load(records);
        self.selection.clear();
        self.editor.cancel();
        self.load = LoadStatus::Loaded {
            at: Local::now(),
            count,
        };
        self.refresh_for_query();
    }

    pub fn fail_load(&mut self, reason: String) {
        self.load = LoadStatus::Failed { reason };
    }

    pub fn begin_load(&mut self) {
        self.load = LoadStatus::Loading;
    }

    /// Re-filters after the committed query changed and returns to page 1.
    pub fn refresh_for_query(&mut self) {
        self.apply_search_filter();
        self.paginator.reset();
    }

    /// Re-filters after the store changed, keeping the page when it still
    /// exists.
    pub fn refresh_for_store(&mut self) {
        self.apply_search_filter();
        self.paginator.clamp(self.filtered.len());
    }

    /// Recomputes the filtered indices from the store and committed query.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            total_records = self.store.len(),
            query_len = self.search.query().len(),
        )
        .entered();

        self.filtered = self.search.filter(&self.store);

        tracing::debug!(filtered_count = self.filtered.len(), "search filter applied");
    }

    /// Removes one record, pruning it from the selection and the draft.
    pub fn delete_record(&mut self, id: &RecordId) -> bool {
        if !self.store.delete(id) {
            return false;
        }
        self.prune_dangling();
        self.refresh_for_store();
        true
    }

    /// Removes every selected record and clears the selection.
    ///
    /// Returns how many records were removed.
    pub fn delete_selected(&mut self) -> usize {
        let ids = self.selection.take();
        let removed = self.store.delete_many(&ids);
        self.prune_dangling();
        self.refresh_for_store();
        tracing::info!(requested = ids.len(), removed, "selected records deleted");
        removed
    }

    /// Drops selected ids and the draft whose records are gone.
    fn prune_dangling(&mut self) {
        let store = &self.store;
        let dropped = self.selection.prune(|id| store.contains(id));
        let discarded = self.editor.discard_unless(|id| store.contains(id));
        if dropped > 0 || discarded {
            tracing::debug!(dropped, discarded, "pruned references to deleted records");
        }
    }

    /// Writes the draft back to the store.
    ///
    /// Returns `false` when idle, or when the draft's record has gone.
    pub fn save_edit(&mut self) -> bool {
        let Some(draft) = self.editor.commit() else {
            return false;
        };
        let id = draft.id.clone();
        let saved = self.store.update(&id, draft);
        if saved {
            self.refresh_for_store();
            tracing::info!(id = %id, "record saved");
        }
        saved
    }

    /// Number of records passing the committed query.
    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Records passing the committed query, in store order.
    pub fn filtered_records(&self) -> impl Iterator<Item = &Record> {
        self.filtered
            .iter()
            .filter_map(|&idx| self.store.records().get(idx))
    }

    /// Records on the current page.
    #[must_use]
    pub fn current_page_rows(&self) -> Vec<&Record> {
        let range = self.paginator.range(self.filtered.len());
        self.filtered[range]
            .iter()
            .filter_map(|&idx| self.store.records().get(idx))
            .collect()
    }

    #[must_use]
    pub fn current_page_ids(&self) -> Vec<RecordId> {
        self.current_page_rows()
            .into_iter()
            .map(|record| record.id.clone())
            .collect()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.paginator.page_count(self.filtered.len())
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Size of the whole store, regardless of the query.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.store.len()
    }

    /// Builds the view model for a `rows` x `cols` viewport.
    ///
    /// Table rows beyond what the viewport can hold are not drawn; the page
    /// itself is unaffected.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> TableViewModel {
        let columns = Self::compute_columns(cols);
        let needle = self.search.needle();
        let visible_rows = rows.saturating_sub(CHROME_ROWS).max(1);

        let row_views: Vec<RowView> = self
            .current_page_rows()
            .into_iter()
            .take(visible_rows)
            .map(|record| self.compute_row(record, &columns, &needle))
            .collect();

        let page_fully_checked = !row_views.is_empty() && row_views.iter().all(|row| row.is_checked);

        TableViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            status: StatusInfo {
                selected: self.selected_count(),
                total: self.total_count(),
                matching: self.filtered_len(),
            },
            columns,
            rows: row_views,
            page_fully_checked,
            pagination: self.compute_pagination(),
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
        }
    }

    fn compute_columns(cols: usize) -> ColumnWidths {
        let fixed = CHECKBOX_WIDTH + COLUMN_GAP * 3 + ID_WIDTH + ROLE_WIDTH + MARKER_RESERVE;
        let flexible = cols.saturating_sub(fixed);
        let name = (flexible * 2 / 5).max(MIN_FLEX_WIDTH);
        let email = flexible.saturating_sub(name).max(MIN_FLEX_WIDTH);
        ColumnWidths {
            id: ID_WIDTH,
            name,
            email,
            role: ROLE_WIDTH,
        }
    }

    fn compute_row(&self, record: &Record, columns: &ColumnWidths, needle: &str) -> RowView {
        let is_checked = self.selection.contains(&record.id);

        if let Some(draft) = self.editor.draft().filter(|draft| draft.id == record.id) {
            let plain = |text: &str, width| fit_cell(text, Vec::new(), width);
            return RowView {
                id: plain(draft.id.as_str(), columns.id),
                name: plain(&draft.name, columns.name),
                email: plain(&draft.email, columns.email),
                role: plain(&draft.role, columns.role),
                is_checked,
                is_editing: true,
            };
        }

        let cell = |text: &str, width| -> Cell { fit_cell(text, highlight_ranges(text, needle), width) };
        RowView {
            id: cell(record.id.as_str(), columns.id),
            name: cell(&record.name, columns.name),
            email: cell(&record.email, columns.email),
            role: cell(&record.role, columns.role),
            is_checked,
            is_editing: false,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let subtitle = match &self.load {
            LoadStatus::Loading => "Loading records...".to_string(),
            LoadStatus::Loaded { at, count } => {
                format!("{count} records loaded at {}", at.format("%H:%M:%S"))
            }
            LoadStatus::Failed { reason } => format!("Load failed: {reason}"),
        };
        HeaderInfo {
            title: " Admin UI ".to_string(),
            subtitle,
        }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        let mode = self.search.mode();
        SearchBarInfo {
            input: self.search.input().to_string(),
            mode_label: mode.label(),
            pending: mode == SearchMode::Deferred && self.search.has_pending(),
        }
    }

    fn compute_pagination(&self) -> PaginationView {
        let controls = self.paginator.controls(self.filtered.len());
        let half = PAGE_WINDOW / 2;
        let start = controls
            .current
            .saturating_sub(half)
            .min(controls.count.saturating_sub(PAGE_WINDOW - 1))
            .max(1);
        let end = (start + PAGE_WINDOW - 1).min(controls.count);

        PaginationView {
            current: controls.current,
            count: controls.count,
            pages: controls.pages().filter(|page| (start..=end).contains(page)).collect(),
            can_first: controls.can_first,
            can_previous: controls.can_previous,
            can_next: controls.can_next,
            can_last: controls.can_last,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if let Some(id) = self.editor.editing_id() {
            format!("editing {id}  set name|email|role <value>  save  cancel  q: quit")
        } else if matches!(self.load, LoadStatus::Failed { .. }) {
            "retry: load again  q: quit".to_string()
        } else {
            let hints = match self.search.mode() {
                SearchMode::Live => "s <text>: search  toggle: on-enter mode  sel/del/edit <id>  selpage  delsel  first/prev/next/last/page <n>  q: quit",
                SearchMode::Deferred => "s <text>: type  enter: apply  toggle: live mode  sel/del/edit <id>  selpage  delsel  first/prev/next/last/page <n>  q: quit",
            };
            hints.to_string()
        };
        FooterInfo { keybindings }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        match &self.load {
            LoadStatus::Loading => Some(EmptyState {
                message: "Loading records...".to_string(),
                subtitle: "Fetching the member list".to_string(),
                is_error: false,
            }),
            LoadStatus::Failed { reason } => Some(EmptyState {
                message: "Could not load records".to_string(),
                subtitle: format!("{reason}. Type 'retry' to try again."),
                is_error: true,
            }),
            LoadStatus::Loaded { .. } if self.store.is_empty() => Some(EmptyState {
                message: "No records".to_string(),
                subtitle: "The member list is empty".to_string(),
                is_error: false,
            }),
            LoadStatus::Loaded { .. } if self.filtered.is_empty() => Some(EmptyState {
                message: format!("No records match \"{}\"", self.search.query()),
                subtitle: format!("Clear the search to see all {} records", self.store.len()),
                is_error: false,
            }),
            LoadStatus::Loaded { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::EditField;

    fn records(n: usize) -> Vec<Record> {
        (1..=n)
            .map(|i| Record::new(i as u64, format!("User {i}"), format!("user{i}@x.io"), "member"))
            .collect()
    }

    fn loaded(n: usize) -> AppState {
        let mut state = AppState::new(10, Theme::default());
        state.finish_load(records(n));
        state
    }

    #[test]
    fn new_state_is_loading_and_empty() {
        let state = AppState::new(10, Theme::default());
        assert_eq!(state.load, LoadStatus::Loading);
        assert_eq!(state.page_count(), 0);
        assert!(state.current_page_rows().is_empty());
        assert!(state.compute_viewmodel(30, 100).empty_state.is_some());
    }

    #[test]
    fn finish_load_resets_selection_draft_and_page() {
        let mut state = loaded(25);
        state.selection.toggle(&RecordId::new("3"));
        let record = state.store.get(&RecordId::new("4")).cloned().unwrap();
        state.editor.begin(&record);
        state.paginator.set_page(3, 25);

        state.finish_load(records(12));
        assert_eq!(state.selected_count(), 0);
        assert!(!state.editor.is_editing());
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.page_count(), 2);
    }

    #[test]
    fn deleting_last_row_of_last_page_moves_back() {
        let mut state = loaded(11);
        state.paginator.set_page(2, 11);
        assert!(state.delete_record(&RecordId::new("11")));
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.page_count(), 1);
    }

    #[test]
    fn delete_record_prunes_selection_and_draft() {
        let mut state = loaded(3);
        let id = RecordId::new("2");
        state.selection.toggle(&id);
        let record = state.store.get(&id).cloned().unwrap();
        state.editor.begin(&record);

        assert!(state.delete_record(&id));
        assert!(!state.selection.contains(&id));
        assert!(!state.editor.is_editing());
        assert!(!state.delete_record(&id));
    }

    #[test]
    fn delete_selected_discards_draft_of_removed_row_only() {
        let mut state = loaded(4);
        state.selection.toggle(&RecordId::new("1"));
        state.selection.toggle(&RecordId::new("3"));
        let record = state.store.get(&RecordId::new("3")).cloned().unwrap();
        state.editor.begin(&record);

        assert_eq!(state.delete_selected(), 2);
        assert_eq!(state.selected_count(), 0);
        assert!(!state.editor.is_editing());

        let record = state.store.get(&RecordId::new("4")).cloned().unwrap();
        state.editor.begin(&record);
        state.selection.toggle(&RecordId::new("2"));
        assert_eq!(state.delete_selected(), 1);
        assert_eq!(state.editor.editing_id(), Some(&RecordId::new("4")));
        assert_eq!(state.total_count(), 1);
    }

    #[test]
    fn save_edit_keeps_page_and_refilters() {
        let mut state = loaded(25);
        state.search.set_input("user");
        state.refresh_for_query();
        state.paginator.set_page(2, state.filtered_len());

        let record = state.store.get(&RecordId::new("15")).cloned().unwrap();
        state.editor.begin(&record);
        state.editor.set_field(EditField::Name, "Robert");
        assert!(state.save_edit());
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.store.get(&RecordId::new("15")).unwrap().name, "Robert");
    }

    #[test]
    fn editing_row_shows_draft_values() {
        let mut state = loaded(3);
        let record = state.store.get(&RecordId::new("1")).cloned().unwrap();
        state.editor.begin(&record);
        state.editor.set_field(EditField::Email, "draft@x.io");

        let viewmodel = state.compute_viewmodel(30, 100);
        let row = &viewmodel.rows[0];
        assert!(row.is_editing);
        assert_eq!(row.email.text, "draft@x.io");
        assert_eq!(state.store.get(&RecordId::new("1")).unwrap().email, "user1@x.io");
    }

    #[test]
    fn viewmodel_highlights_query_matches() {
        let mut state = loaded(3);
        state.search.set_input("USER 2");
        state.refresh_for_query();
        let viewmodel = state.compute_viewmodel(30, 100);
        assert_eq!(viewmodel.rows.len(), 1);
        assert_eq!(viewmodel.rows[0].name.highlight_ranges, vec![(0, 6)]);
        assert_eq!(viewmodel.status.matching, 1);
    }

    #[test]
    fn pagination_window_tracks_current_page() {
        let mut state = loaded(200);
        state.paginator.set_page(10, 200);
        let view = state.compute_viewmodel(30, 100).pagination;
        assert_eq!(view.pages, vec![7, 8, 9, 10, 11, 12, 13]);

        state.paginator.last(200);
        let view = state.compute_viewmodel(30, 100).pagination;
        assert_eq!(view.pages, vec![14, 15, 16, 17, 18, 19, 20]);

        state.paginator.first(200);
        let view = state.compute_viewmodel(30, 100).pagination;
        assert_eq!(view.pages, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn no_match_empty_state_names_query() {
        let mut state = loaded(3);
        state.search.set_input("zzz");
        state.refresh_for_query();
        let empty = state.compute_viewmodel(30, 100).empty_state.unwrap();
        assert!(empty.message.contains("zzz"));
        assert!(!empty.is_error);
    }

    #[test]
    fn failed_load_is_an_error_empty_state() {
        let mut state = AppState::new(10, Theme::default());
        state.fail_load("HTTP 500 from upstream".to_string());
        let viewmodel = state.compute_viewmodel(30, 100);
        let empty = viewmodel.empty_state.unwrap();
        assert!(empty.is_error);
        assert!(empty.subtitle.contains("retry"));
        assert!(viewmodel.footer.keybindings.starts_with("retry"));
    }
}
