//! Selection status line.

use crate::ui::helpers::{display_width, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusInfo;

/// Renders `Selected Items: x / y` with the match count right-aligned.
pub fn render_status(out: &mut String, row: usize, status: &StatusInfo, theme: &Theme, cols: usize) -> usize {
    let left = format!(" Selected Items: {} / {}", status.selected, status.total);
    let right = format!("{} matching ", status.matching);
    let used = display_width(&left) + display_width(&right);

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&left);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    pad(out, used, cols);
    out.push_str(&right);
    out.push_str(Theme::reset());
    row + 1
}
