//! Tracer provider backed by a local OTLP/JSON file.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::{Config as TraceConfig, TracerProvider};

use super::file_writer::RotatingFileWriter;
use super::span_formatter::SpanFormatter;

/// Writes each exported batch as one OTLP/JSON line.
#[derive(Debug)]
struct FileSpanExporter {
    writer: Arc<RotatingFileWriter>,
    formatter: SpanFormatter,
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    fn new(writer: Arc<RotatingFileWriter>, resource: &Resource) -> Self {
        Self {
            writer,
            formatter: SpanFormatter::new(resource),
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Err(TraceError::from("exporter is shut down"));
        }
        let line = self.formatter.format_batch(batch).to_string();
        self.writer
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.formatter.set_resource(resource);
    }
}

/// Builds a provider that exports every span synchronously when it closes.
///
/// Spans end up in `writer`, which rotates on its own size limit.
#[must_use]
pub fn create_tracer_provider(writer: Arc<RotatingFileWriter>, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(writer, &resource);

    TracerProvider::builder()
        .with_config(TraceConfig::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
