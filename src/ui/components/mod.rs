//! Composable UI component renderers.
//!
//! Each component writes one part of the frame into a shared `String` and
//! returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title and load status
//! - [`search`]: Search input box with mode label
//! - [`status`]: Selected-items counter
//! - [`table`]: Checkbox column plus ID, NAME, EMAIL, ROLE
//! - [`pagination`]: First/previous/page numbers/next/last
//! - [`footer`]: Command hints
//! - [`empty`]: Message shown in place of the table
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header title]
//! [Header status]
//! [Border]
//! [Search Bar - 3 lines]
//! [Selected Items: x / y]
//! [Table Headers]
//! [Table Rows or Empty State]
//! [Blank padding]
//! [Pagination]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod pagination;
mod search;
mod status;
mod table;

pub use table::{CHECKBOX_WIDTH, COLUMN_GAP};

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TableViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use pagination::render_pagination;
use search::render_search_bar;
use status::render_status;
use table::{render_table_headers, render_table_rows};

fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Draws a full frame. The pagination bar, border and footer are pinned to
/// the bottom three rows.
pub fn render_frame(out: &mut String, vm: &TableViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2;

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    current_row = render_search_bar(out, current_row, &vm.search_bar, theme, cols);
    current_row = render_status(out, current_row, &vm.status, theme, cols);
    current_row = render_table_headers(out, current_row, &vm.columns, vm.page_fully_checked, theme);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, current_row + 1, empty, theme, cols);
    } else {
        render_table_rows(out, current_row, &vm.rows, &vm.columns, theme, cols);
    }

    let footer_row = rows.saturating_sub(1).max(current_row + 3);
    let border_row = footer_row - 1;
    let pagination_row = border_row - 1;

    render_pagination(out, pagination_row, &vm.pagination, theme, cols);
    render_border(out, border_row, &theme.colors.border, cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);
}
