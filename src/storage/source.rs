//! Record sources for the one-shot startup load.
//!
//! A [`RecordSource`] produces the full record list that seeds the
//! [`RecordStore`](super::RecordStore). The default source is the remote JSON
//! endpoint; a local file source serves offline use and fixtures.
//!
//! Both sources expect the same payload: a JSON array of objects each carrying
//! at least `id`, `name`, `email` and `role`.

use crate::domain::error::{AdminError, Result};
use crate::domain::Record;
use futures_util::future::BoxFuture;
use std::path::PathBuf;
use tracing::Instrument;

/// Upstream endpoint serving the member list.
pub const DEFAULT_ENDPOINT: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Abstraction over where the initial record list comes from.
///
/// Object safe so the worker can hold a `Box<dyn RecordSource>`.
///
/// # Implementations
///
/// - [`HttpSource`]: GET a remote JSON endpoint (default)
/// - [`FileSource`]: read a local JSON file
pub trait RecordSource: Send + Sync + std::fmt::Debug {
    /// Human-readable location, used in logs and error messages.
    fn describe(&self) -> String;

    /// Fetches the full record list.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Fetch`] or [`AdminError::HttpStatus`] for transport
    /// failures, [`AdminError::Io`] for unreadable files and
    /// [`AdminError::Parse`] when the payload is not an array of records.
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<Record>>>;
}

/// Parses a payload into records.
///
/// # Errors
///
/// Returns [`AdminError::Parse`] if the bytes are not a JSON array of records.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<Record>> {
    serde_json::from_slice::<Vec<Record>>(bytes)
        .map_err(|e| AdminError::Parse(format!("expected a JSON array of records: {e}")))
}

/// Remote JSON endpoint source.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl RecordSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> BoxFuture<'_, Result<Vec<Record>>> {
        let span = tracing::debug_span!("http_fetch_records", url = %self.url);
        Box::pin(
            async move {
                let response = self
                    .client
                    .get(&self.url)
                    .send()
                    .await
                    .map_err(|e| AdminError::Fetch(e.to_string()))?;

                let status = response.status();
                if !status.is_success() {
                    tracing::debug!(status = status.as_u16(), "endpoint returned error status");
                    return Err(AdminError::HttpStatus {
                        status: status.as_u16(),
                        url: self.url.clone(),
                    });
                }

                let body = response
                    .bytes()
                    .await
                    .map_err(|e| AdminError::Fetch(e.to_string()))?;

                let records = parse_records(&body)?;
                tracing::debug!(count = records.len(), "records fetched over http");
                Ok(records)
            }
            .instrument(span),
        )
    }
}

/// Local JSON file source.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> BoxFuture<'_, Result<Vec<Record>>> {
        Box::pin(async move {
            tracing::debug!(path = ?self.path, "reading records from file");
            let contents = tokio::fs::read(&self.path).await?;
            let records = parse_records(&contents)?;
            tracing::debug!(count = records.len(), "records read from file");
            Ok(records)
        })
    }
}

/// Picks the source named by the configuration.
///
/// A configured `source_file` wins over the endpoint.
#[must_use]
pub fn source_from_config(config: &crate::Config) -> Box<dyn RecordSource> {
    config.source_file.as_ref().map_or_else(
        || Box::new(HttpSource::new(config.endpoint.clone())) as Box<dyn RecordSource>,
        |path| Box::new(FileSource::new(path.clone())) as Box<dyn RecordSource>,
    )
}
