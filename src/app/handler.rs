//! Event handling and state transition logic.
//!
//! [`handle_event`] is the reducer: it applies one [`Event`] to the
//! [`AppState`] and returns whether the frame needs redrawing plus the side
//! effects to run. Every event is total. An event that cannot apply (unknown
//! id, no draft, already on the boundary page) changes nothing and returns
//! `(false, [])`.
//!
//! # Event Types
//!
//! - **Search**: `SearchInput`, `SearchSubmit`, `ToggleSearchMode`
//! - **Paging**: `FirstPage`, `PreviousPage`, `NextPage`, `LastPage`, `GoToPage`
//! - **Selection**: `ToggleSelect`, `TogglePageSelection`, `DeleteSelected`
//! - **Rows**: `Delete`, `BeginEdit`, `EditField`, `SaveEdit`, `CancelEdit`
//! - **Lifecycle**: `Retry`, `Quit`, `WorkerResponse`
//!
//! # Example
//!
//! ```rust
//! use adminui::app::{handle_event, AppState, Event};
//! use adminui::ui::Theme;
//!
//! let mut state = AppState::new(10, Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::NextPage)?;
//! assert!(!render && actions.is_empty());
//! # Ok::<(), adminui::AdminError>(())
//! ```

use super::modes::EditField;
use super::state::LoadStatus;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::RecordId;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Operator input and worker responses, processed one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// New full contents of the search box.
    SearchInput(String),
    /// Enter in the search box; commits a deferred query.
    SearchSubmit,
    /// Switches between live and deferred search.
    ToggleSearchMode,

    FirstPage,
    PreviousPage,
    NextPage,
    LastPage,
    /// Jumps to a 1-based page, clamped to the valid range.
    GoToPage(usize),

    /// Checkbox of one row.
    ToggleSelect(RecordId),
    /// Header checkbox: every row of the current page.
    TogglePageSelection,
    DeleteSelected,

    Delete(RecordId),
    BeginEdit(RecordId),
    EditField {
        field: EditField,
        value: String,
    },
    SaveEdit,
    CancelEdit,

    /// Re-requests the load after a failure.
    Retry,
    Quit,

    WorkerResponse(WorkerResponse),
}

fn unchanged() -> Result<(bool, Vec<Action>)> {
    Ok((false, Vec::new()))
}

fn redraw_if(changed: bool) -> Result<(bool, Vec<Action>)> {
    Ok((changed, Vec::new()))
}

/// Applies `event` to `state`.
///
/// # Returns
///
/// `(render, actions)`: whether the frame changed, and the side effects to
/// run in order.
///
/// # Errors
///
/// Currently never fails.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SearchInput(text) => {
            if text == state.search.input() {
                return unchanged();
            }
            if state.search.set_input(text) {
                state.refresh_for_query();
            }
            // The box itself is drawn, so deferred keystrokes still redraw.
            Ok((true, vec![]))
        }
        Event::SearchSubmit => {
            if state.search.submit() {
                state.refresh_for_query();
                return Ok((true, vec![]));
            }
            unchanged()
        }
        Event::ToggleSearchMode => {
            if state.search.toggle_mode() {
                state.refresh_for_query();
            }
            Ok((true, vec![]))
        }

        Event::FirstPage => redraw_if(state.paginator.first(state.filtered_len())),
        Event::PreviousPage => redraw_if(state.paginator.previous(state.filtered_len())),
        Event::NextPage => redraw_if(state.paginator.next(state.filtered_len())),
        Event::LastPage => redraw_if(state.paginator.last(state.filtered_len())),
        Event::GoToPage(page) => redraw_if(state.paginator.set_page(*page, state.filtered_len())),

        Event::ToggleSelect(id) => {
            if !state.store.contains(id) {
                tracing::debug!(id = %id, "toggle ignored, unknown record");
                return unchanged();
            }
            let selected = state.selection.toggle(id);
            tracing::debug!(id = %id, selected, "selection toggled");
            Ok((true, vec![]))
        }
        Event::TogglePageSelection => {
            let page_ids = state.current_page_ids();
            redraw_if(state.selection.toggle_all(&page_ids))
        }
        Event::DeleteSelected => {
            if state.selection.is_empty() {
                return unchanged();
            }
            state.delete_selected();
            Ok((true, vec![]))
        }

        Event::Delete(id) => redraw_if(state.delete_record(id)),
        Event::BeginEdit(id) => {
            let Some(record) = state.store.get(id) else {
                tracing::debug!(id = %id, "edit ignored, unknown record");
                return unchanged();
            };
            let record = record.clone();
            state.editor.begin(&record);
            Ok((true, vec![]))
        }
        Event::EditField { field, value } => redraw_if(state.editor.set_field(*field, value)),
        Event::SaveEdit => {
            if !state.editor.is_editing() {
                return unchanged();
            }
            if !state.save_edit() {
                tracing::debug!("draft dropped, record no longer exists");
            }
            Ok((true, vec![]))
        }
        Event::CancelEdit => redraw_if(state.editor.cancel()),

        Event::Retry => {
            if !matches!(state.load, LoadStatus::Failed { .. }) {
                return unchanged();
            }
            tracing::info!("retrying record load");
            state.begin_load();
            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::load_records())],
            ))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),

        Event::WorkerResponse(response) => {
            match response {
                WorkerResponse::RecordsLoaded { records } => {
                    tracing::debug!(count = records.len(), "worker delivered records");
                    state.finish_load(records.clone());
                }
                WorkerResponse::FetchFailed { reason } => {
                    tracing::warn!(reason = %reason, "record load failed");
                    state.fail_load(reason.clone());
                }
            }
            Ok((true, vec![]))
        }
    }
}
