//! Platform path resolution.
//!
//! Follows the XDG base directory layout, falling back to `$HOME` based
//! defaults and finally the working directory.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "adminui";

fn from_env_or_home(var: &str, home_suffix: &[&str], lookup: &impl Fn(&str) -> Option<String>) -> PathBuf {
    if let Some(dir) = lookup(var).filter(|value| !value.is_empty()) {
        return PathBuf::from(dir).join(APP_DIR);
    }
    lookup("HOME")
        .filter(|value| !value.is_empty())
        .map_or_else(
            || PathBuf::from(".").join(APP_DIR),
            |home| {
                home_suffix
                    .iter()
                    .fold(PathBuf::from(home), |path, part| path.join(part))
                    .join(APP_DIR)
            },
        )
}

/// Directory for log and trace files.
///
/// `$XDG_DATA_HOME/adminui`, else `~/.local/share/adminui`.
///
/// # Examples
///
/// ```
/// use adminui::infrastructure::get_data_dir;
///
/// assert!(get_data_dir().ends_with("adminui"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    data_dir_with(&|var| std::env::var(var).ok())
}

/// Default location of the optional configuration file.
///
/// `$XDG_CONFIG_HOME/adminui/config.toml`, else
/// `~/.config/adminui/config.toml`.
#[must_use]
pub fn get_config_path() -> PathBuf {
    config_path_with(&|var| std::env::var(var).ok())
}

fn data_dir_with(lookup: &impl Fn(&str) -> Option<String>) -> PathBuf {
    from_env_or_home("XDG_DATA_HOME", &[".local", "share"], lookup)
}

fn config_path_with(lookup: &impl Fn(&str) -> Option<String>) -> PathBuf {
    from_env_or_home("XDG_CONFIG_HOME", &[".config"], lookup).join("config.toml")
}

/// Creates `dir` and its parents if missing.
///
/// # Errors
///
/// Returns the underlying I/O error if the directory cannot be created.
pub fn ensure_dir(dir: &Path) -> std::io::Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(dir)
}
