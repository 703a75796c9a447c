//! Record worker: runs source fetches off the event loop.
//!
//! The worker lives on its own tokio task and talks to the event loop over a
//! pair of unbounded channels. Every request gets exactly one response.

use crate::domain::error::{AdminError, Result};
use crate::storage::RecordSource;
use crate::worker::{WorkerMessage, WorkerResponse};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Owns the record source and answers [`WorkerMessage`]s.
#[derive(Debug)]
pub struct RecordWorker {
    source: Box<dyn RecordSource>,
}

/// Event-loop side of a spawned [`RecordWorker`].
#[derive(Debug)]
pub struct WorkerHandle {
    requests: mpsc::UnboundedSender<WorkerMessage>,
    /// Responses in request order.
    pub responses: mpsc::UnboundedReceiver<WorkerResponse>,
    task: JoinHandle<()>,
}

impl WorkerHandle {
    /// Queues a request for the worker.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Worker`] if the worker task has stopped.
    pub fn post(&self, message: WorkerMessage) -> Result<()> {
        tracing::debug!(message = message.name(), "posting to worker");
        self.requests
            .send(message)
            .map_err(|e| AdminError::Worker(format!("worker stopped, dropped {}", e.0.name())))
    }

    /// Closes the request channel and waits for the worker to drain.
    pub async fn shutdown(self) {
        drop(self.requests);
        if let Err(e) = self.task.await {
            tracing::warn!(error = %e, "worker task ended abnormally");
        }
    }
}

impl RecordWorker {
    #[must_use]
    pub fn new(source: Box<dyn RecordSource>) -> Self {
        Self { source }
    }

    /// Maps a fetch result to a response with consistent logging.
    fn handle_fetch_result<T, F>(operation: &str, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation, "worker operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation, error = %e, retryable = e.is_retryable(), "worker operation failed");
                WorkerResponse::FetchFailed {
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn handle_load_records(&self) -> WorkerResponse {
        let result = self.source.fetch().await;
        Self::handle_fetch_result("load records", result, |records| {
            tracing::info!(
                count = records.len(),
                source = %self.source.describe(),
                "records loaded"
            );
            WorkerResponse::RecordsLoaded { records }
        })
    }

    /// Processes one message inside a span parented to the sender's span.
    pub async fn handle_message(&self, message: WorkerMessage) -> WorkerResponse {
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::debug_span!(
            "worker_handle_message",
            message_type = message.name(),
            source = %self.source.describe()
        );
        if let Some(parent) = message.trace_context().and_then(|ctx| ctx.to_parent_context()) {
            span.set_parent(parent);
        }

        async move {
            match message {
                WorkerMessage::LoadRecords { .. } => self.handle_load_records().await,
            }
        }
        .instrument(span)
        .await
    }

    /// Moves the worker onto a tokio task.
    ///
    /// The task ends when the request channel closes or the response receiver
    /// is dropped.
    #[must_use]
    pub fn spawn(self) -> WorkerHandle {
        let (requests, mut inbox) = mpsc::unbounded_channel::<WorkerMessage>();
        let (outbox, responses) = mpsc::unbounded_channel::<WorkerResponse>();

        let task = tokio::spawn(async move {
            while let Some(message) = inbox.recv().await {
                let response = self.handle_message(message).await;
                if outbox.send(response).is_err() {
                    tracing::debug!("response receiver dropped, worker exiting");
                    break;
                }
            }
            tracing::debug!("worker task finished");
        });

        WorkerHandle {
            requests,
            responses,
            task,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Record;
    use futures_util::future::BoxFuture;

    #[derive(Debug)]
    struct FixedSource(std::result::Result<Vec<Record>, u16>);

    impl RecordSource for FixedSource {
        fn describe(&self) -> String {
            "fixed".to_string()
        }

        fn fetch(&self) -> BoxFuture<'_, Result<Vec<Record>>> {
            let result = self.0.clone().map_err(|status| AdminError::HttpStatus {
                status,
                url: "fixed".to_string(),
            });
            Box::pin(async move { result })
        }
    }

    #[tokio::test]
    async fn load_success_returns_records() {
        let records = vec![Record::new("1", "Ann", "ann@x.io", "admin")];
        let worker = RecordWorker::new(Box::new(FixedSource(Ok(records.clone()))));
        let response = worker.handle_message(WorkerMessage::load_records()).await;
        assert_eq!(response, WorkerResponse::RecordsLoaded { records });
    }

    #[tokio::test]
    async fn load_failure_carries_reason() {
        let worker = RecordWorker::new(Box::new(FixedSource(Err(503))));
        let response = worker.handle_message(WorkerMessage::load_records()).await;
        assert_eq!(
            response,
            WorkerResponse::FetchFailed {
                reason: "HTTP 503 from fixed".to_string()
            }
        );
    }

    #[tokio::test]
    async fn spawned_worker_answers_each_request() {
        let worker = RecordWorker::new(Box::new(FixedSource(Ok(vec![]))));
        let mut handle = worker.spawn();
        handle.post(WorkerMessage::load_records()).unwrap();
        handle.post(WorkerMessage::load_records()).unwrap();

        for _ in 0..2 {
            let response = handle.responses.recv().await.unwrap();
            assert_eq!(response, WorkerResponse::RecordsLoaded { records: vec![] });
        }
        handle.shutdown().await;
    }
}
