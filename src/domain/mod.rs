//! Domain layer for the admin table.
//!
//! Core types independent of storage, transport and rendering.
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: User record model and search matching
//!
//! # Examples
//!
//! ```
//! use adminui::domain::{Record, Result};
//!
//! fn sample() -> Result<Record> {
//!     Ok(Record::new("1", "Aaron Miles", "aaron@mailinator.com", "member"))
//! }
//! ```

pub mod error;
pub mod record;

pub use error::{AdminError, Result};
pub use record::{Record, RecordId};
