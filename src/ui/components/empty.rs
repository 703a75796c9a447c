//! Empty state component renderer.

use crate::ui::helpers::{display_width, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message in place of the table.
///
/// Load failures use the error color so the retry hint stands out.
pub fn render_empty_state(out: &mut String, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let color = if empty.is_error {
        &theme.colors.error_fg
    } else {
        &theme.colors.empty_state_fg
    };

    let msg_len = display_width(&empty.message).min(cols);
    let msg_padding = cols.saturating_sub(msg_len) / 2;

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    pad(out, 0, msg_padding);
    out.push_str(&empty.message);
    pad(out, msg_padding + msg_len, cols);
    out.push_str(Theme::reset());

    let sub_len = display_width(&empty.subtitle).min(cols);
    let sub_padding = cols.saturating_sub(sub_len) / 2;

    position_cursor(out, row + 1, 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    pad(out, 0, sub_padding);
    out.push_str(&empty.subtitle);
    pad(out, sub_padding + sub_len, cols);
    out.push_str(Theme::reset());

    row + 2
}
