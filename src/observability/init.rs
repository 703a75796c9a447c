//! Subscriber setup.

use std::path::Path;
use std::sync::Arc;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::file_writer::RotatingFileWriter;
use super::tracer;
use crate::Config;

pub const SERVICE_NAME: &str = "adminui";
pub const LOG_FILE: &str = "adminui.log";
pub const TRACE_FILE: &str = "adminui-otlp.json";

/// Keeps the tracer provider alive for the life of the process.
#[must_use = "dropping the guard stops span export"]
#[derive(Debug)]
pub struct TracingGuard {
    _provider: TracerProvider,
}

/// Installs the global subscriber.
///
/// Events go to `adminui.log` and spans to `adminui-otlp.json`, both under the
/// data directory and both rotated by `trace_max_bytes` / `trace_backups`.
/// Stdout is left alone since the table is drawn there.
///
/// `RUST_LOG` wins over `config.trace_level`, which defaults to `info`.
///
/// Returns `None` when the data directory cannot be created or a subscriber is
/// already installed. The application runs either way.
pub fn init_tracing(config: &Config) -> Option<TracingGuard> {
    let data_dir = crate::infrastructure::get_data_dir();
    crate::infrastructure::ensure_dir(&data_dir).ok()?;
    init_tracing_in(&data_dir, config)
}

pub(crate) fn init_tracing_in(dir: &Path, config: &Config) -> Option<TracingGuard> {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let log_writer = Arc::new(RotatingFileWriter::new(
        dir.join(LOG_FILE),
        config.trace_max_bytes,
        config.trace_backups,
    ));
    let span_writer = Arc::new(RotatingFileWriter::new(
        dir.join(TRACE_FILE),
        config.trace_max_bytes,
        config.trace_backups,
    ));

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::create_tracer_provider(span_writer, resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(log_writer);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()
        .ok()?;

    Some(TracingGuard {
        _provider: provider,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            trace_level: Some("debug".to_string()),
            ..Config::default()
        };

        let first = init_tracing_in(dir.path(), &config);
        let second = init_tracing_in(dir.path(), &config);
        assert!(second.is_none());

        if first.is_some() {
            tracing::error!(target: "adminui::test", "subscriber installed");
            let log = std::fs::read_to_string(dir.path().join(LOG_FILE)).unwrap();
            assert!(log.contains("subscriber installed"));
        }
    }
}
