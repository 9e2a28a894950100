//! Typed JSON access to the planner's collections

use serde::{de::DeserializeOwned, Serialize};

use super::{KeyValueStore, Result};
use crate::constants::storage::{MEALS_KEY, SHOPPING_LIST_KEY};
use crate::model::{Meal, ShoppingItem};

/// Loads and saves whole collections as JSON under fixed keys
pub struct PlannerRepository {
    store: Box<dyn KeyValueStore>,
}

impl PlannerRepository {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Load and parse the value under `key`.
    ///
    /// Absent keys, read failures and unparseable values all yield `None`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key, "No stored value");
                return None;
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read stored value");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "Discarding malformed stored value");
                None
            }
        }
    }

    /// Serialize `value` and write it under `key`
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.store.set(key, &json)
    }

    /// Stored meals, or empty
    pub fn load_meals(&self) -> Vec<Meal> {
        self.load(MEALS_KEY).unwrap_or_default()
    }

    /// Stored shopping list, or empty
    pub fn load_shopping_list(&self) -> Vec<ShoppingItem> {
        self.load(SHOPPING_LIST_KEY).unwrap_or_default()
    }

    pub fn save_meals(&self, meals: &[Meal]) -> Result<()> {
        self.save(MEALS_KEY, meals)
    }

    pub fn save_shopping_list(&self, items: &[ShoppingItem]) -> Result<()> {
        self.save(SHOPPING_LIST_KEY, items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MealType, Weekday};
    use crate::storage::MemoryStore;

    #[test]
    fn test_missing_keys_load_empty() {
        let repo = PlannerRepository::new(MemoryStore::new());
        assert!(repo.load_meals().is_empty());
        assert!(repo.load_shopping_list().is_empty());
    }

    #[test]
    fn test_malformed_values_load_empty() {
        let store = MemoryStore::with_entries([
            (MEALS_KEY, "{not json"),
            (SHOPPING_LIST_KEY, r#"[{"id":"1","name":"eggs"}]"#),
        ]);
        let repo = PlannerRepository::new(store);

        assert!(repo.load_meals().is_empty());
        // missing `checked` field
        assert!(repo.load_shopping_list().is_empty());
    }

    #[test]
    fn test_one_bad_record_discards_whole_collection() {
        let store = MemoryStore::with_entries([(
            MEALS_KEY,
            r#"[
                {"id":"1","name":"Oats","type":"breakfast","ingredients":["oats"],"day":"Monday"},
                {"id":"2","name":"Tacos","type":"brunch","ingredients":[],"day":"Tuesday"},
                {"id":"3","name":"Soup","type":"dinner","ingredients":[],"day":"Funday"}
            ]"#,
        )]);
        let repo = PlannerRepository::new(store.clone());

        assert!(repo.load_meals().is_empty());
        // the stored text is left as it was until the next write
        assert!(store
            .get(MEALS_KEY)
            .expect("get")
            .is_some_and(|raw| raw.contains("Funday")));
    }

    #[test]
    fn test_reads_original_storage_format() {
        let store = MemoryStore::with_entries([(
            MEALS_KEY,
            r#"[{"id":"1712345678901","name":"Pancakes","type":"breakfast","ingredients":["flour","eggs"],"day":"Saturday"}]"#,
        )]);
        let repo = PlannerRepository::new(store);

        let meals = repo.load_meals();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].meal_type, MealType::Breakfast);
        assert_eq!(meals[0].day, Weekday::Saturday);
        assert_eq!(meals[0].ingredients, vec!["flour", "eggs"]);
    }

    #[test]
    fn test_save_writes_under_fixed_keys() {
        let store = MemoryStore::new();
        let repo = PlannerRepository::new(store.clone());

        repo.save_shopping_list(&[ShoppingItem::new("1", "rice")])
            .expect("save list");
        repo.save_meals(&[]).expect("save meals");

        assert_eq!(
            store.get(SHOPPING_LIST_KEY).expect("get").as_deref(),
            Some(r#"[{"id":"1","name":"rice","checked":false}]"#)
        );
        assert_eq!(store.get(MEALS_KEY).expect("get").as_deref(), Some("[]"));
    }
}
