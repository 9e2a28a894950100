//! Terminal User Interface for the meal planner

pub mod app;
pub mod components;
pub mod handlers;
pub mod popups;
pub mod state;
pub mod themes;
pub mod utils;

// Re-exports
pub use app::App;
pub use themes::THEME_REGISTRY;
