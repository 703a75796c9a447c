//! Shared rendering utilities.
//!
//! Every component draws into a `String` frame buffer, so the helpers here
//! take the buffer as their first argument.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::Cell;

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Number of terminal columns `text` occupies, counting one per char.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Appends spaces so that `used` columns become `width`.
pub fn pad(out: &mut String, used: usize, width: usize) {
    out.push_str(&" ".repeat(width.saturating_sub(used)));
}

/// Fits `text` into `width` columns, cutting with `...` when too long.
///
/// Highlight ranges are clipped to the kept bytes.
#[must_use]
pub fn fit_cell(text: &str, ranges: Vec<(usize, usize)>, width: usize) -> Cell {
    if display_width(text) <= width {
        return Cell {
            text: text.to_string(),
            highlight_ranges: ranges,
        };
    }

    let keep = width.saturating_sub(3);
    let cut = text
        .char_indices()
        .nth(keep)
        .map_or(text.len(), |(idx, _)| idx);
    let highlight_ranges = ranges
        .into_iter()
        .filter(|&(start, _)| start < cut)
        .map(|(start, end)| (start, end.min(cut)))
        .collect();

    Cell {
        text: format!("{}...", &text[..cut]),
        highlight_ranges,
    }
}

/// Writes `cell` with its highlight ranges, then restores `base_style`.
///
/// Ranges that do not fall on char boundaries are drawn unhighlighted.
pub fn render_highlighted_text(out: &mut String, cell: &Cell, theme: &Theme, base_style: &str) {
    let text = cell.text.as_str();
    let mut cursor = 0;

    for &(start, end) in &cell.highlight_ranges {
        let (Some(before), Some(matched)) = (text.get(cursor..start), text.get(start..end)) else {
            continue;
        };
        out.push_str(before);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.push_str(matched);
        out.push_str(Theme::reset());
        out.push_str(base_style);
        cursor = end;
    }

    out.push_str(text.get(cursor..).unwrap_or_default());
}
