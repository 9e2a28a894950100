//! Mealplan Core - Shared library for the meal planner
//!
//! This crate provides the core functionality for the mealplan TUI:
//! - Meal, shopping item and draft models
//! - The planner state machine that owns all mutable state
//! - Key-value persistence (SQLite and in-memory)
//! - Paths and configuration loading

pub mod config;
pub mod constants;
pub mod model;
pub mod paths;
pub mod planner;
pub mod storage;

// Re-exports for convenience
pub use config::Config;
pub use model::{DraftMeal, Meal, MealType, ShoppingItem, Weekday};
pub use planner::{Planner, Tab};
pub use storage::{
    Database, KeyValueStore, MemoryStore, PlannerRepository, SqliteStore, StorageError,
};
