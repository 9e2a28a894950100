//! Color themes

mod definitions;
mod registry;

use once_cell::sync::Lazy;
use ratatui::style::Color;

pub use registry::ThemeRegistry;

/// All built-in themes
pub static THEME_REGISTRY: Lazy<ThemeRegistry> = Lazy::new(ThemeRegistry::new);

/// Name of the fallback theme
pub const DEFAULT_THEME_NAME: &str = mealplan_core::constants::ui::DEFAULT_THEME;

/// A named color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub display_name: String,
    pub bg_color: Color,
    pub border_color: Color,
    pub title_color: Color,
    pub accent_color: Color,
    pub text_color: Color,
    pub dim_color: Color,
    pub success_color: Color,
    pub warning_color: Color,
    pub status_bar_bg_color: Color,
    pub highlight_bg_color: Color,
}
