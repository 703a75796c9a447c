//! Logging and span export to local files.
//!
//! ```text
//! tracing macros ─┬─ fmt layer ───────────────────────→ adminui.log
//!                 └─ tracing-opentelemetry → FileSpanExporter → adminui-otlp.json
//! ```
//!
//! Both files live in the data directory (`$XDG_DATA_HOME/adminui` or
//! `~/.local/share/adminui`) and rotate by size with a fixed number of backups.
//!
//! Filter precedence:
//! 1. `RUST_LOG`
//! 2. `trace_level` in the config file or `--trace-level`
//! 3. `info`
//!
//! ```rust,no_run
//! use adminui::observability::init_tracing;
//! use adminui::Config;
//!
//! let _guard = init_tracing(&Config::default());
//! tracing::info!("ready");
//! ```

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use file_writer::RotatingFileWriter;
pub use init::{init_tracing, TracingGuard, LOG_FILE, SERVICE_NAME, TRACE_FILE};
