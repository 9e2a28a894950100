//! Popups drawn over the active view
//!
//! Each popup keeps its own view state; the data it edits stays in the planner.

pub mod common;
pub mod help;
pub mod meal_form;

pub use help::HelpPopup;
pub use meal_form::{FormField, MealFormPopup};
