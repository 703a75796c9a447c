//! Table component renderer.
//!
//! Four data columns (ID, NAME, EMAIL, ROLE) behind a checkbox column. Checked
//! rows take the `checked` colors across the full width; the row under edit
//! shows its draft in the `editing` color with a trailing marker.

use crate::ui::helpers::{self, display_width, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Cell, ColumnWidths, RowView};

/// Width of the `[x] ` checkbox column.
pub const CHECKBOX_WIDTH: usize = 4;
/// Spaces between data columns.
pub const COLUMN_GAP: usize = 2;
const EDIT_MARKER: &str = " (editing)";

/// Renders the column headers with the page-level checkbox.
pub fn render_table_headers(
    out: &mut String,
    row: usize,
    columns: &ColumnWidths,
    page_fully_checked: bool,
    theme: &Theme,
) -> usize {
    let checkbox = if page_fully_checked { "[x] " } else { "[ ] " };

    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(checkbox);
    out.push_str(&format!(
        "{:<id$}{gap}{:<name$}{gap}{:<email$}{gap}{:<role$}",
        "ID",
        "NAME",
        "EMAIL",
        "ROLE",
        id = columns.id,
        name = columns.name,
        email = columns.email,
        role = columns.role,
        gap = " ".repeat(COLUMN_GAP),
    ));
    out.push_str(Theme::reset());
    row + 1
}

pub fn render_table_rows(out: &mut String, row: usize, rows: &[RowView], columns: &ColumnWidths, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for view in rows {
        current_row = render_table_row(out, current_row, view, columns, theme, cols);
    }
    current_row
}

fn row_style(view: &RowView, theme: &Theme) -> String {
    let mut style = String::new();
    if view.is_checked {
        style.push_str(&Theme::fg(&theme.colors.checked_fg));
        style.push_str(&Theme::bg(&theme.colors.checked_bg));
    } else if view.is_editing {
        style.push_str(&Theme::fg(&theme.colors.editing_fg));
    } else {
        style.push_str(&Theme::fg(&theme.colors.text_normal));
    }
    if view.is_editing {
        style.push_str(Theme::bold());
    }
    style
}

fn render_cell(out: &mut String, cell: &Cell, width: usize, theme: &Theme, style: &str) {
    helpers::render_highlighted_text(out, cell, theme, style);
    pad(out, display_width(&cell.text), width);
}

/// Renders one row padded to the full terminal width.
fn render_table_row(out: &mut String, row: usize, view: &RowView, columns: &ColumnWidths, theme: &Theme, cols: usize) -> usize {
    let style = row_style(view, theme);
    let gap = " ".repeat(COLUMN_GAP);

    position_cursor(out, row, 1);
    out.push_str(&style);
    out.push_str(if view.is_checked { "[x] " } else { "[ ] " });

    render_cell(out, &view.id, columns.id, theme, &style);
    out.push_str(&gap);
    render_cell(out, &view.name, columns.name, theme, &style);
    out.push_str(&gap);
    render_cell(out, &view.email, columns.email, theme, &style);
    out.push_str(&gap);
    render_cell(out, &view.role, columns.role, theme, &style);

    let mut used = CHECKBOX_WIDTH + columns.id + columns.name + columns.email + columns.role + COLUMN_GAP * 3;
    if view.is_editing {
        out.push_str(EDIT_MARKER);
        used += EDIT_MARKER.len();
    }
    pad(out, used, cols);

    out.push_str(Theme::reset());
    row + 1
}
