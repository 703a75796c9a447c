//! Footer component renderer.

use crate::ui::helpers::{display_width, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the command help line, centered and dimmed.
///
/// Help text wider than the terminal is cut to fit.
pub fn render_footer(out: &mut String, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help: String = footer.keybindings.chars().take(cols).collect();
    let text_len = display_width(&help);
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    pad(out, 0, padding);
    out.push_str(&help);
    pad(out, padding + text_len, cols);
    out.push_str(Theme::reset());
    row + 1
}
