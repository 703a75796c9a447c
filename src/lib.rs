//! adminui: a terminal admin table for user records.
//!
//! Records are fetched once from an HTTP endpoint (or a local JSON file) and
//! then managed entirely in memory:
//! - Case-insensitive substring search across every field, live or on Enter
//! - Fixed-size pagination with first / previous / numbered / next / last
//! - Single-row inline editing with save and cancel
//! - Per-row and per-page selection with bulk deletion
//!
//! Nothing is written back to the source.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI shell (main.rs)                                │  ← args, config, loop
//! │  Command parser (input.rs)                          │  ← line → Event
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Reducer: handle_event                            │
//! │  - Filter, paginator, editor, selection             │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - RecordStore │   │ - Async load  │
//! │ - Theming     │   │ - HTTP / file │   │ - Responses   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Record, RecordId, AdminError                     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! `~/.config/adminui/config.toml` (or `--config <path>`), every key optional:
//!
//! ```toml
//! endpoint = "https://example.com/members.json"
//! # source_file = "members.json"
//! page_size = 10
//! theme_name = "catppuccin-latte"
//! trace_level = "debug"
//! rows = 40
//! cols = 120
//! ```
//!
//! Command-line flags override the file.
//!
//! # Example
//!
//! ```rust
//! use adminui::worker::WorkerResponse;
//! use adminui::{handle_event, initialize, Config, Event, Record};
//!
//! let mut state = initialize(&Config::default());
//! let loaded = WorkerResponse::RecordsLoaded {
//!     records: vec![
//!         Record::new("1", "Aaron Miles", "aaron@mailinator.com", "member"),
//!         Record::new("2", "Aishwarya Naik", "aishwarya@mailinator.com", "member"),
//!     ],
//! };
//! handle_event(&mut state, &Event::WorkerResponse(loaded))?;
//!
//! handle_event(&mut state, &Event::SearchInput("aish".to_string()))?;
//! assert_eq!(state.filtered_len(), 1);
//! # Ok::<(), adminui::AdminError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod input;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{AdminError, Record, RecordId, Result};
pub use ui::Theme;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app::DEFAULT_PAGE_SIZE;
use crate::storage::DEFAULT_ENDPOINT;
use crate::ui::theme::DEFAULT_THEME;

/// Runtime configuration.
///
/// Read from TOML; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL returning a JSON array of records.
    pub endpoint: String,

    /// Local JSON file to load instead of `endpoint`.
    pub source_file: Option<PathBuf>,

    /// Rows per page. Default: 10
    pub page_size: usize,

    /// Built-in theme: `catppuccin-mocha` or `catppuccin-latte`.
    pub theme_name: String,

    /// Custom TOML theme; takes precedence over `theme_name`.
    pub theme_file: Option<PathBuf>,

    /// `trace`, `debug`, `info`, `warn` or `error`, or any `EnvFilter`
    /// directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Size at which the log and span files rotate.
    pub trace_max_bytes: u64,

    /// Rotated files kept per log.
    pub trace_backups: usize,

    /// Render viewport height.
    pub rows: usize,

    /// Render viewport width.
    pub cols: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            source_file: None,
            page_size: DEFAULT_PAGE_SIZE,
            theme_name: DEFAULT_THEME.to_string(),
            theme_file: None,
            trace_level: None,
            trace_max_bytes: 10 * 1024 * 1024,
            trace_backups: 3,
            rows: 30,
            cols: 100,
        }
    }
}

impl Config {
    /// Parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Config`] if the file cannot be read or parsed,
    /// or fails [`Config::validate`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use adminui::Config;
    ///
    /// let dir = std::env::temp_dir().join("adminui-doc-config");
    /// std::fs::create_dir_all(&dir)?;
    /// let path = dir.join("config.toml");
    /// std::fs::write(&path, "page_size = 25\n")?;
    ///
    /// let config = Config::from_file(&path)?;
    /// assert_eq!(config.page_size, 25);
    /// assert_eq!(config.rows, 30);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AdminError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml(&contents)
            .map_err(|e| AdminError::Config(format!("{}: {e}", path.display())))
    }

    /// Parses TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Config`] for malformed TOML or invalid values.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| AdminError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`AdminError::Config`] for a zero page size, zero viewport or
    /// an empty endpoint without a source file.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(AdminError::Config("page_size must be at least 1".to_string()));
        }
        if self.rows == 0 || self.cols == 0 {
            return Err(AdminError::Config("rows and cols must be at least 1".to_string()));
        }
        if self.source_file.is_none() && self.endpoint.trim().is_empty() {
            return Err(AdminError::Config(
                "endpoint is empty and no source_file is set".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builds the initial state: empty store, loading, page 1.
///
/// An unknown theme name or unreadable theme file falls back to the default
/// theme with a warning.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(page_size = config.page_size, "initializing adminui");

    let theme = Theme::resolve(&config.theme_name, config.theme_file.as_deref())
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load theme, using default");
            Theme::default()
        });

    AppState::new(config.page_size, theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn file_values_override_defaults() {
        let config = Config::from_toml(
            r#"
            source_file = "members.json"
            page_size = 5
            theme_name = "catppuccin-latte"
            trace_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.source_file, Some(PathBuf::from("members.json")));
        assert_eq!(config.page_size, 5);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.cols, 100);
    }

    #[test]
    fn invalid_values_are_config_errors() {
        assert!(matches!(
            Config::from_toml("page_size = 0"),
            Err(AdminError::Config(_))
        ));
        assert!(matches!(
            Config::from_toml("endpoint = \"\""),
            Err(AdminError::Config(_))
        ));
        assert!(matches!(
            Config::from_toml("page_size = \"ten\""),
            Err(AdminError::Config(_))
        ));
        assert!(Config::from_toml("endpoint = \"\"\nsource_file = \"a.json\"").is_ok());
    }

    #[test]
    fn missing_config_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, AdminError::Config(_)));
    }

    #[test]
    fn initialize_falls_back_to_default_theme() {
        let config = Config {
            theme_name: "solarized".to_string(),
            page_size: 4,
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme, Theme::default());
        assert_eq!(state.paginator.page_size(), 4);
        assert_eq!(state.load, app::LoadStatus::Loading);
    }

    #[test]
    fn initialize_uses_named_theme() {
        let config = Config {
            theme_name: "catppuccin-latte".to_string(),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "catppuccin-latte");
    }
}
