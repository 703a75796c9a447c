//! Error types for the admin table.
//!
//! This module defines the centralized error type [`AdminError`] and a type alias
//! [`Result`] used throughout the crate. Only loading records, reading
//! configuration and loading themes can fail; the view engine itself (filter,
//! paginate, select, edit, delete) is total and never produces an error.

use thiserror::Error;

/// The main error type for admin table operations.
///
/// Loading failures are split by cause so the empty state can tell an operator
/// whether retrying is likely to help (transport and status errors) or not
/// (a malformed payload).
///
/// # Examples
///
/// ```
/// use adminui::AdminError;
///
/// let err = AdminError::HttpStatus { status: 503, url: "http://example".to_string() };
/// assert_eq!(err.to_string(), "HTTP 503 from http://example");
/// ```
#[derive(Debug, Error)]
pub enum AdminError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// The endpoint answered with a non-success status code.
    #[error("HTTP {status} from {url}")]
    HttpStatus {
        /// Status code returned by the endpoint.
        status: u16,
        /// Endpoint that was requested.
        url: String,
    },

    /// The payload was not a JSON array of records.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The background load task is gone or could not be reached.
    #[error("Worker communication error: {0}")]
    Worker(String),
}

impl AdminError {
    /// Whether re-issuing the same load has a chance of succeeding.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Fetch(_) | Self::HttpStatus { .. } | Self::Io(_) | Self::Worker(_))
    }
}

/// A specialized `Result` type for admin table operations.
pub type Result<T> = std::result::Result<T, AdminError>;
