//! Infrastructure layer for filesystem and environment interactions.

pub mod paths;

pub use paths::{ensure_dir, get_config_path, get_data_dir};
