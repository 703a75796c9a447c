//! Side effects requested by the event handler.
//!
//! The reducer never performs I/O itself. It returns a `Vec<Action>` and the
//! event loop in `main.rs` executes them in order.
//!
//! # Example
//!
//! ```rust
//! use adminui::app::Action;
//! use adminui::worker::WorkerMessage;
//!
//! let actions = vec![Action::PostToWorker(WorkerMessage::load_records())];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::worker::WorkerMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hands a request to the background record worker.
    PostToWorker(WorkerMessage),

    /// Ends the event loop.
    Quit,
}
