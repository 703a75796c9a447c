//! Terminal user interface for the admin table.
//!
//! The UI layer is declarative: state is turned into a [`TableViewModel`],
//! and components turn the view model into ANSI-styled text.
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, truncation)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation
//!
//! # Example
//!
//! ```rust
//! use adminui::app::AppState;
//! use adminui::ui::{render_to_string, Theme};
//!
//! let state = AppState::new(10, Theme::default());
//! let frame = render_to_string(&state, 30, 100);
//! assert!(frame.contains("Loading"));
//! ```

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_to_string};
pub use theme::Theme;
pub use viewmodel::{
    Cell, ColumnWidths, EmptyState, FooterInfo, HeaderInfo, PaginationView, RowView,
    SearchBarInfo, StatusInfo, TableViewModel,
};
