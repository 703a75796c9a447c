//! Header component renderer.

use crate::ui::helpers::{display_width, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the centered title and the load status line under it.
///
/// Returns the next free row (`row + 2`).
pub fn render_header(out: &mut String, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = display_width(&header.title).min(cols);
    let padding = cols.saturating_sub(title_len) / 2;

    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }
    pad(out, 0, padding);
    out.push_str(&header.title);
    pad(out, padding + title_len, cols);
    out.push_str(Theme::reset());

    let sub_len = display_width(&header.subtitle).min(cols);
    let sub_padding = cols.saturating_sub(sub_len) / 2;

    position_cursor(out, row + 1, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    pad(out, 0, sub_padding);
    out.push_str(&header.subtitle);
    pad(out, sub_padding + sub_len, cols);
    out.push_str(Theme::reset());

    row + 2
}
