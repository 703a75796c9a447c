//! Mode types for search input and row editing.
//!
//! # Search modes
//!
//! - **Live**: every keystroke commits the query and re-filters
//! - **Deferred**: keystrokes fill a pending buffer committed on Enter
//!
//! # Example
//!
//! ```rust
//! use adminui::app::modes::{EditField, SearchMode};
//!
//! let mode = SearchMode::Live.toggled();
//! assert_eq!(mode, SearchMode::Deferred);
//! assert_eq!("email".parse::<EditField>(), Ok(EditField::Email));
//! ```

use std::fmt;
use std::str::FromStr;

/// How search input reaches the committed query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Query follows the input box on every keystroke.
    #[default]
    Live,

    /// Input is buffered and committed on submit.
    Deferred,
}

impl SearchMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Live => Self::Deferred,
            Self::Deferred => Self::Live,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Deferred => "on enter",
        }
    }
}

/// Editable column of a row.
///
/// The id is never editable; it keys the draft back to its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditField {
    Name,
    Email,
    Role,
}

impl EditField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Role];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Role => "role",
        }
    }
}

impl fmt::Display for EditField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let expected: Vec<&str> = Self::ALL.iter().map(|f| f.as_str()).collect();
                format!("unknown field '{s}' (expected one of: {})", expected.join(", "))
            })
    }
}
