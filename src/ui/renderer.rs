//! Top-level rendering coordinator.
//!
//! ```text
//! AppState → compute_viewmodel → TableViewModel → render_frame → ANSI frame
//! ```

use crate::app::AppState;
use crate::ui::components;
use std::io::Write;

/// Clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// Renders one full frame into a string.
///
/// The frame starts with a clear-screen sequence and ends with the cursor
/// parked on the last row, ready for the next command.
#[must_use]
pub fn render_to_string(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);

    let mut out = String::with_capacity(rows * cols * 4);
    out.push_str(CLEAR_SCREEN);
    components::render_frame(&mut out, &viewmodel, &state.theme, rows, cols);
    crate::ui::helpers::position_cursor(&mut out, rows, 1);
    out.push_str("> ");
    out
}

/// Renders the frame to stdout.
///
/// # Errors
///
/// Returns an I/O error if stdout cannot be written or flushed.
pub fn render(state: &AppState, rows: usize, cols: usize) -> std::io::Result<()> {
    let _span = tracing::trace_span!("render", rows, cols).entered();
    let frame = render_to_string(state, rows, cols);
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(frame.as_bytes())?;
    stdout.flush()
}
