//! Storage layer: the in-memory record store and the sources that seed it.
//!
//! There is no persistence. The store lives for the lifetime of the process
//! and is populated once by a [`RecordSource`].
//!
//! # Modules
//!
//! - `store`: ordered in-memory record sequence with delete/update operations
//! - `source`: HTTP and file sources for the startup load

pub mod source;
pub mod store;

pub use source::{
    parse_records, source_from_config, FileSource, HttpSource, RecordSource, DEFAULT_ENDPOINT,
};
pub use store::RecordStore;
