//! Theme registry for discovering and accessing themes

use super::{Theme, DEFAULT_THEME_NAME};
use std::collections::HashMap;

/// Registry of all available themes
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
    ordered_names: Vec<String>,
}

impl ThemeRegistry {
    /// Create a new registry with all built-in themes
    pub fn new() -> Self {
        let mut registry = Self {
            themes: HashMap::new(),
            ordered_names: Vec::new(),
        };

        use super::definitions::*;

        registry.register(mealplan());
        registry.register(terminal());
        registry.register(nord());
        registry.register(gruvbox_dark());
        registry.register(catppuccin_mocha());

        registry
    }

    fn register(&mut self, theme: Theme) {
        self.ordered_names.push(theme.name.clone());
        self.themes.insert(theme.name.clone(), theme);
    }

    /// Get a theme by name
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Get a theme by name, or the default theme
    pub fn get_or_default(&self, name: &str) -> &Theme {
        self.themes.get(name).unwrap_or_else(|| {
            self.themes
                .get(DEFAULT_THEME_NAME)
                .expect("Default theme must exist")
        })
    }

    /// List all themes in registration order
    pub fn list(&self) -> Vec<(&String, &Theme)> {
        self.ordered_names
            .iter()
            .filter_map(|name| self.themes.get(name).map(|theme| (name, theme)))
            .collect()
    }

    /// Get the number of registered themes
    pub fn count(&self) -> usize {
        self.themes.len()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
