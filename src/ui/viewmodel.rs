//! View model types representing renderable UI state.
//!
//! View models are computed by [`AppState::compute_viewmodel`] and consumed by
//! the renderer. They hold display-ready data only: truncated text, highlight
//! ranges, flags for checked and edited rows, and which paging controls apply.
//!
//! [`AppState::compute_viewmodel`]: crate::app::AppState::compute_viewmodel

/// Everything needed to draw one frame of the admin table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    pub status: StatusInfo,
    pub columns: ColumnWidths,
    /// Rows of the current page.
    pub rows: Vec<RowView>,
    /// Header checkbox state: every row on this page is checked.
    pub page_fully_checked: bool,
    pub pagination: PaginationView,
    pub footer: FooterInfo,
    /// Replaces the table when there is nothing to show.
    pub empty_state: Option<EmptyState>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Load status line under the title.
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Search box contents.
    pub input: String,
    pub mode_label: &'static str,
    /// Deferred mode only: the box differs from the applied query.
    pub pending: bool,
}

/// "Selected Items: x / y" line above the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusInfo {
    pub selected: usize,
    pub total: usize,
    /// Records passing the current query.
    pub matching: usize,
}

/// Display width of each table column, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub id: usize,
    pub name: usize,
    pub email: usize,
    pub role: usize,
}

/// Text of one table cell plus the byte ranges matching the query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    pub text: String,
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: Cell,
    pub name: Cell,
    pub email: Cell,
    pub role: Cell,
    pub is_checked: bool,
    /// Cells show the draft instead of the stored record.
    pub is_editing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub current: usize,
    pub count: usize,
    /// Page numbers to draw, a window around `current` when there are many.
    pub pages: Vec<usize>,
    pub can_first: bool,
    pub can_previous: bool,
    pub can_next: bool,
    pub can_last: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
    /// Drawn with the error color (failed load).
    pub is_error: bool,
}
