//! Background worker for the record load.
//!
//! The startup fetch runs on a tokio task so the event loop keeps handling
//! input while the request is in flight. Failures come back as a response
//! instead of leaving the table silently empty.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation, task spawning and message processing

pub mod handler;
pub mod messages;

pub use handler::{RecordWorker, WorkerHandle};
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
