//! Worker message types for the record load task.
//!
//! Requests flow from the reducer (via [`Action::PostToWorker`]) to the
//! [`RecordWorker`](super::RecordWorker); responses flow back into the event
//! loop as [`Event::WorkerResponse`]. Each request carries the caller's trace
//! context so worker spans join the caller's trace.
//!
//! [`Action::PostToWorker`]: crate::app::Action::PostToWorker
//! [`Event::WorkerResponse`]: crate::app::Event::WorkerResponse

use crate::domain::Record;
use serde::{Deserialize, Serialize};

/// Trace and parent span ids captured from the sending span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace id, 32 hex digits.
    pub trace_id: String,

    /// Span id of the sender, 16 hex digits.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the OpenTelemetry ids of the current span.
    ///
    /// Returns `None` when no valid span context is active, which is the case
    /// whenever the OpenTelemetry layer is not installed.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }

    /// Rebuilds a remote parent context from the captured ids.
    ///
    /// Returns `None` if either id is not valid hex.
    #[must_use]
    pub fn to_parent_context(&self) -> Option<opentelemetry::Context> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_id = TraceId::from_hex(&self.trace_id).ok()?;
        let span_id = SpanId::from_hex(&self.parent_span_id).ok()?;
        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );
        Some(opentelemetry::Context::new().with_remote_span_context(span_context))
    }
}

/// Generates `WorkerMessage` constructors that attach the current trace
/// context.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_records(LoadRecords {}),
}

/// Requests handled by the record worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Fetch the full record list from the configured source.
    LoadRecords {
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadRecords { trace_context } => trace_context.as_ref(),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LoadRecords { .. } => "load_records",
        }
    }
}

/// Outcomes reported by the record worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The source produced a record list.
    RecordsLoaded {
        /// Records in source order.
        records: Vec<Record>,
    },

    /// The fetch failed; the table stays empty until a retry succeeds.
    FetchFailed {
        /// Human-readable failure description.
        reason: String,
    },
}
