//! Application layer coordinating state, events, and actions.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Operator input → Events → handle_event → State Mutations → Actions → Side Effects
//!                               ↑                                        ↓
//!                               └─────────── Worker Responses ───────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event enum and the reducer
//! - [`modes`]: Search mode and editable field types
//! - [`search`]: View filter with live and deferred input
//! - [`pagination`]: Fixed-size paginator
//! - [`editor`]: Single-slot row editor
//! - [`selection`]: Selection tracker for bulk deletion
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod editor;
pub mod handler;
pub mod modes;
pub mod pagination;
pub mod search;
pub mod selection;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{EditField, SearchMode};
pub use pagination::{PageControls, Paginator, DEFAULT_PAGE_SIZE};
pub use search::SearchState;
pub use selection::SelectionTracker;
pub use editor::{EditState, RowEditor};
pub use state::{AppState, LoadStatus};
