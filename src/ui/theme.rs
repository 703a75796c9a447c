//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents holding hex colors. Two Catppuccin flavours are
//! embedded in the binary; custom themes load from a file.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme (default)
//! - `catppuccin-latte`: Light theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cba6f7"
//! # header_bg is optional
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#89b4fa"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! checked_fg = "#1e1e2e"
//! checked_bg = "#a6e3a1"
//! editing_fg = "#fab387"
//! page_current_fg = "#1e1e2e"
//! page_current_bg = "#89b4fa"
//! empty_state_fg = "#89b4fa"
//! error_fg = "#f38ba8"
//! ```

use crate::domain::error::{AdminError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_THEME: &str = "catppuccin-mocha";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`#rrggbb`) for every styled element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub text_normal: String,
    /// Footer, disabled pagination controls, secondary text.
    pub text_dim: String,
    pub border: String,
    pub search_bar_border: String,

    /// Search match highlight.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// Rows whose checkbox is ticked.
    pub checked_fg: String,
    pub checked_bg: String,

    /// Row currently being edited.
    pub editing_fg: String,

    pub page_current_fg: String,
    pub page_current_bg: String,

    pub empty_state_fg: String,
    /// Load failures.
    pub error_fg: String,
}

impl ThemeColors {
    fn all(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("header_fg", self.header_fg.as_str()),
            ("text_normal", self.text_normal.as_str()),
            ("text_dim", self.text_dim.as_str()),
            ("border", self.border.as_str()),
            ("search_bar_border", self.search_bar_border.as_str()),
            ("match_highlight_fg", self.match_highlight_fg.as_str()),
            ("match_highlight_bg", self.match_highlight_bg.as_str()),
            ("checked_fg", self.checked_fg.as_str()),
            ("checked_bg", self.checked_bg.as_str()),
            ("editing_fg", self.editing_fg.as_str()),
            ("page_current_fg", self.page_current_fg.as_str()),
            ("page_current_bg", self.page_current_bg.as_str()),
            ("empty_state_fg", self.empty_state_fg.as_str()),
            ("error_fg", self.error_fg.as_str()),
        ]
        .into_iter()
        .chain(self.header_bg.as_deref().map(|bg| ("header_bg", bg)))
    }
}

impl Theme {
    /// Loads a built-in theme by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads and validates a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Theme`] if the file cannot be read, is not valid
    /// theme TOML, or holds a color that is not `#rrggbb`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AdminError::Theme(format!("failed to read {}: {e}", path.display())))?;

        let theme: Self = toml::from_str(&contents)
            .map_err(|e| AdminError::Theme(format!("failed to parse {}: {e}", path.display())))?;
        theme.validate()?;
        Ok(theme)
    }

    /// Picks the theme file if given, otherwise the named built-in.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Theme`] for an unreadable file or unknown name.
    pub fn resolve(name: &str, file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            return Self::from_file(path);
        }
        Self::from_name(name).ok_or_else(|| {
            AdminError::Theme(format!(
                "unknown theme '{name}' (built-in: catppuccin-mocha, catppuccin-latte)"
            ))
        })
    }

    fn validate(&self) -> Result<()> {
        for (field, hex) in self.colors.all() {
            if Self::parse_hex(hex).is_none() {
                return Err(AdminError::Theme(format!(
                    "color {field} = '{hex}' is not #rrggbb"
                )));
            }
        }
        Ok(())
    }

    fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }

    /// 24-bit foreground escape. Unparseable colors render white.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::parse_hex(hex).unwrap_or((255, 255, 255));
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape. Unparseable colors render white.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::parse_hex(hex).unwrap_or((255, 255, 255));
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Grey palette used if the embedded default ever fails to parse.
    fn monochrome() -> Self {
        let grey = |hex: &str| hex.to_string();
        Self {
            name: "monochrome".to_string(),
            colors: ThemeColors {
                header_fg: grey("#ffffff"),
                header_bg: None,
                text_normal: grey("#d0d0d0"),
                text_dim: grey("#808080"),
                border: grey("#606060"),
                search_bar_border: grey("#a0a0a0"),
                match_highlight_fg: grey("#000000"),
                match_highlight_bg: grey("#d0d0d0"),
                checked_fg: grey("#000000"),
                checked_bg: grey("#a0a0a0"),
                editing_fg: grey("#ffffff"),
                page_current_fg: grey("#000000"),
                page_current_bg: grey("#d0d0d0"),
                empty_state_fg: grey("#d0d0d0"),
                error_fg: grey("#ffffff"),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::monochrome)
    }
}
