//! Command-line entry point.
//!
//! Wires the library together:
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  event loop (this file)      │
//! │  stdin lines ─→ parse_command ─→ handle_event ─→ render
//! │        ▲                            │
//! │        │                   Action::PostToWorker
//! │        │                            ▼
//! │  ┌─────┴────────────────────────────────┐
//! │  │ RecordWorker (tokio task)            │  ← HTTP / file fetch
//! │  └──────────────────────────────────────┘
//! └──────────────────────────────┘
//! ```
//!
//! # Startup
//!
//! 1. Parse flags, read the config file, overlay the flags
//! 2. Initialize tracing (log + span files in the data directory)
//! 3. Build `AppState`, spawn the worker, post the first `LoadRecords`
//! 4. Draw the loading frame and wait for input or worker responses
//!
//! Type `q` (or close stdin) to exit.

#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use adminui::input::parse_command;
use adminui::storage::source_from_config;
use adminui::worker::{RecordWorker, WorkerHandle, WorkerMessage};
use adminui::{handle_event, Action, AppState, Config, Event};

#[derive(Debug, Parser)]
#[command(name = "adminui", version, about = "Terminal admin table for user records")]
struct Args {
    /// Config file [default: ~/.config/adminui/config.toml if present]
    #[arg(long, env = "ADMINUI_CONFIG")]
    config: Option<PathBuf>,

    /// URL returning a JSON array of records
    #[arg(long, env = "ADMINUI_ENDPOINT")]
    endpoint: Option<String>,

    /// Load records from a local JSON file instead of the endpoint
    #[arg(long, env = "ADMINUI_SOURCE_FILE")]
    source_file: Option<PathBuf>,

    /// Built-in theme name
    #[arg(long)]
    theme: Option<String>,

    /// Custom TOML theme file
    #[arg(long)]
    theme_file: Option<PathBuf>,

    /// Rows per page
    #[arg(long)]
    page_size: Option<usize>,

    /// Tracing filter, e.g. `debug` or `adminui=trace`
    #[arg(long)]
    trace_level: Option<String>,

    /// Viewport height
    #[arg(long)]
    rows: Option<usize>,

    /// Viewport width
    #[arg(long)]
    cols: Option<usize>,
}

impl Args {
    fn load_config(&self) -> adminui::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => {
                let default_path = adminui::infrastructure::get_config_path();
                if default_path.is_file() {
                    Config::from_file(&default_path)?
                } else {
                    Config::default()
                }
            }
        };

        if let Some(endpoint) = &self.endpoint {
            config.endpoint.clone_from(endpoint);
        }
        if self.source_file.is_some() {
            config.source_file.clone_from(&self.source_file);
        }
        if let Some(theme) = &self.theme {
            config.theme_name.clone_from(theme);
        }
        if self.theme_file.is_some() {
            config.theme_file.clone_from(&self.theme_file);
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if self.trace_level.is_some() {
            config.trace_level.clone_from(&self.trace_level);
        }
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Event-loop state: the library's `AppState` plus the worker connection.
struct Shell {
    app: AppState,
    worker: WorkerHandle,
    rows: usize,
    cols: usize,
}

impl Shell {
    fn draw(&self) {
        if let Err(e) = adminui::ui::render(&self.app, self.rows, self.cols) {
            tracing::warn!(error = %e, "failed to draw frame");
        }
    }

    /// Runs one event through the reducer. Returns `false` once the loop
    /// should stop.
    fn dispatch(&mut self, event: &Event) -> bool {
        let (should_render, actions) = match handle_event(&mut self.app, event) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "event handling failed");
                return true;
            }
        };

        let mut keep_running = true;
        for action in actions {
            match action {
                Action::PostToWorker(message) => {
                    if let Err(e) = self.worker.post(message) {
                        tracing::error!(error = %e, "failed to post to worker");
                    }
                }
                Action::Quit => keep_running = false,
            }
        }

        if should_render && keep_running {
            self.draw();
        }
        keep_running
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("adminui: {e}");
            return ExitCode::FAILURE;
        }
    };

    let _tracing = adminui::observability::init_tracing(&config);

    let source = source_from_config(&config);
    tracing::info!(source = %source.describe(), page_size = config.page_size, "starting");

    let worker = RecordWorker::new(source).spawn();
    if let Err(e) = worker.post(WorkerMessage::load_records()) {
        eprintln!("adminui: {e}");
        return ExitCode::FAILURE;
    }

    let mut shell = Shell {
        app: adminui::initialize(&config),
        worker,
        rows: config.rows,
        cols: config.cols,
    };
    shell.draw();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        // `None` is a line that did not parse; the frame is redrawn as is.
        let event = tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => parse_command(&line)
                    .map_err(|e| tracing::info!(input = %line, error = %e, "ignored command"))
                    .ok(),
                Ok(None) => Some(Event::Quit),
                Err(e) => {
                    tracing::error!(error = %e, "failed to read stdin");
                    Some(Event::Quit)
                }
            },
            response = shell.worker.responses.recv() => match response {
                Some(response) => Some(Event::WorkerResponse(response)),
                None => {
                    tracing::error!("worker stopped unexpectedly");
                    Some(Event::Quit)
                }
            },
        };

        match event {
            Some(event) => {
                if !shell.dispatch(&event) {
                    break;
                }
            }
            None => shell.draw(),
        }
    }

    tracing::info!(remaining = shell.app.total_count(), "exiting");
    shell.worker.shutdown().await;
    ExitCode::SUCCESS
}
