//! Shopping list items and ingredient deduplication

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::Meal;

/// One line of the shopping list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    pub checked: bool,
}

impl ShoppingItem {
    /// Create an unchecked item
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            checked: false,
        }
    }
}

/// Every ingredient across `meals`, deduplicated in first-occurrence order.
///
/// Order is meal order, then ingredient order within each meal. Names are
/// compared exactly (no trimming or case folding).
pub fn unique_ingredients(meals: &[Meal]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    meals
        .iter()
        .flat_map(|meal| meal.ingredients.iter())
        .filter(|ingredient| seen.insert(ingredient.as_str()))
        .cloned()
        .collect()
}
