//! Search bar component renderer.

use crate::ui::helpers::{display_width, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the 3-line bordered search box.
///
/// ```text
/// ┌──────────────────────────────────────── live ┐
/// │ Search: ann                                  │
/// └──────────────────────────────────────────────┘
/// ```
///
/// In deferred mode a pending query is flagged with `(enter to apply)`.
pub fn render_search_bar(out: &mut String, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    let label = format!(" {} ", search.mode_label);
    let label_len = display_width(&label);
    let rule_len = inner_width.saturating_sub(label_len + 1);

    position_cursor(out, row, 1);
    pad(out, 0, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push('┌');
    out.push_str(&"─".repeat(rule_len));
    out.push_str(&label);
    out.push_str("─┐");
    out.push_str(Theme::reset());

    let mut search_text = format!(" Search: {}", search.input);
    if search.pending {
        search_text.push_str("  (enter to apply)");
    }
    let search_text: String = search_text.chars().take(inner_width).collect();

    position_cursor(out, row + 1, 1);
    pad(out, 0, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push('│');
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&search_text);
    pad(out, display_width(&search_text), inner_width);
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    pad(out, 0, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push('└');
    out.push_str(&"─".repeat(inner_width));
    out.push('┘');
    out.push_str(Theme::reset());

    row + 3
}
