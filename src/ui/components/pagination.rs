//! Pagination bar renderer.

use crate::ui::helpers::{display_width, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationView;

/// Renders `« ‹ 1 2 [3] 4 › »` centered. Disabled controls are dimmed.
pub fn render_pagination(out: &mut String, row: usize, view: &PaginationView, theme: &Theme, cols: usize) -> usize {
    let normal = Theme::fg(&theme.colors.text_normal);
    let dim = Theme::fg(&theme.colors.text_dim);

    let mut segments: Vec<(String, String)> = Vec::new();
    let control = |label: &str, enabled: bool| {
        (label.to_string(), if enabled { normal.clone() } else { dim.clone() })
    };
    segments.push(control("«", view.can_first));
    segments.push(control("‹", view.can_previous));
    for &page in &view.pages {
        if page == view.current {
            let style = format!(
                "{}{}{}",
                Theme::bold(),
                Theme::fg(&theme.colors.page_current_fg),
                Theme::bg(&theme.colors.page_current_bg)
            );
            segments.push((format!("{page}"), style));
        } else {
            segments.push((format!("{page}"), normal.clone()));
        }
    }
    segments.push(control("›", view.can_next));
    segments.push(control("»", view.can_last));

    let width: usize = segments.iter().map(|(label, _)| display_width(label) + 2).sum::<usize>();
    let padding = cols.saturating_sub(width) / 2;

    position_cursor(out, row, 1);
    pad(out, 0, padding);
    for (label, style) in &segments {
        out.push_str(style);
        out.push(' ');
        out.push_str(label);
        out.push(' ');
        out.push_str(Theme::reset());
    }
    pad(out, padding + width, cols);
    row + 1
}
