//! User configuration loaded from `~/.mealplan/config.toml`
//!
//! Every field is optional. Command line flags take precedence over the file,
//! and the file takes precedence over built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::ui::DEFAULT_THEME;
use crate::paths;

/// Settings read from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Override for the SQLite database location
    pub database_path: Option<PathBuf>,
    /// Theme name
    pub theme: Option<String>,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load configuration from a file.
    ///
    /// A missing file yields defaults. An unreadable or invalid file is
    /// logged and ignored.
    pub fn load(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                return Self::default();
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file");
                return Self::default();
            }
        };

        match Self::parse(&text) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid config file");
                Self::default()
            }
        }
    }

    /// Load from the default location (`~/.mealplan/config.toml`)
    pub fn load_default() -> Self {
        Self::load(&paths::config_path())
    }

    /// Theme name, falling back to the built-in default
    pub fn theme_or_default(&self) -> &str {
        self.theme.as_deref().unwrap_or(DEFAULT_THEME)
    }

    /// Database path, falling back to `~/.mealplan/mealplan.db`
    pub fn database_path_or_default(&self) -> PathBuf {
        self.database_path
            .clone()
            .unwrap_or_else(paths::database_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
            database_path = "/tmp/meals.db"
            theme = "nord"
            "#,
        )
        .expect("valid config");

        assert_eq!(config.database_path, Some(PathBuf::from("/tmp/meals.db")));
        assert_eq!(config.theme_or_default(), "nord");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").expect("empty config is valid");
        assert_eq!(config, Config::default());
        assert_eq!(config.theme_or_default(), DEFAULT_THEME);
        assert_eq!(config.database_path_or_default(), paths::database_path());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let config = Config::load(&temp.path().join("config.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_file_is_ignored() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "theme = [not toml").expect("write config");

        assert_eq!(Config::load(&path), Config::default());
    }

    #[test]
    fn test_load_valid_file() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "theme = \"gruvbox_dark\"\n").expect("write config");

        let config = Config::load(&path);
        assert_eq!(config.theme.as_deref(), Some("gruvbox_dark"));
        assert!(config.database_path.is_none());
    }
}
