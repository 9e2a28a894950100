//! Planner data model
//!
//! Plain serde types plus the two pure transformations the planner relies on:
//! grouping meals by day and deriving a unique ingredient list.

mod meal;
mod shopping;

pub use meal::{meals_for_day, DraftMeal, Meal, MealType, Weekday};
pub use shopping::{unique_ingredients, ShoppingItem};
