//! Filesystem locations used by mealplan
//!
//! Everything lives under `~/.mealplan`. When no home directory can be
//! resolved the current directory is used instead.

use std::path::PathBuf;

use crate::constants::{storage, ui};

/// Root config directory (`~/.mealplan`)
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(ui::CONFIG_DIR_NAME)
}

/// Path of the optional `config.toml`
pub fn config_path() -> PathBuf {
    config_dir().join(ui::CONFIG_FILE_NAME)
}

/// Default SQLite database path
pub fn database_path() -> PathBuf {
    config_dir().join(storage::DATABASE_FILE_NAME)
}

/// Directory for log files
pub fn logs_dir() -> PathBuf {
    config_dir().join(ui::LOGS_DIR_NAME)
}
