//! Planner state machine tests

use proptest::prelude::*;

use super::*;
use crate::constants::storage::{MEALS_KEY, SHOPPING_LIST_KEY};
use crate::storage::{MemoryStore, StorageError};

/// Store whose writes always fail
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> crate::storage::Result<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> crate::storage::Result<()> {
        Err(StorageError::Io(std::io::Error::other("read-only")))
    }
}

fn add_meal(planner: &mut Planner, day: Weekday, name: &str, ingredients: &[&str]) -> String {
    planner.open_add_meal_modal(day);
    planner.set_draft_name(name);
    for (i, ingredient) in ingredients.iter().enumerate() {
        if i > 0 {
            planner.add_ingredient_slot();
        }
        planner.update_ingredient_slot(i, *ingredient);
    }
    planner
        .save_meal()
        .map(|m| m.id.clone())
        .expect("meal should save")
}

fn item_names(planner: &Planner) -> Vec<&str> {
    planner
        .shopping_list()
        .iter()
        .map(|i| i.name.as_str())
        .collect()
}

#[test]
fn test_new_planner_defaults() {
    let planner = Planner::new(MemoryStore::new());
    assert_eq!(planner.active_tab(), Tab::Planner);
    assert!(planner.meals().is_empty());
    assert!(planner.shopping_list().is_empty());
    assert!(!planner.is_modal_open());
    assert_eq!(planner.selected_day(), None);
    assert_eq!(planner.draft(), &DraftMeal::default());
    assert!(!planner.can_generate_shopping_list());
}

#[test]
fn test_open_modal_keeps_draft() {
    let mut planner = Planner::new(MemoryStore::new());
    planner.set_draft_name("Soup");
    planner.open_add_meal_modal(Weekday::Wednesday);

    assert!(planner.is_modal_open());
    assert_eq!(planner.selected_day(), Some(Weekday::Wednesday));
    assert_eq!(planner.draft().name, "Soup");
}

#[test]
fn test_close_modal_resets_draft() {
    let mut planner = Planner::new(MemoryStore::new());
    planner.open_add_meal_modal(Weekday::Monday);
    planner.set_draft_name("Curry");
    planner.set_draft_type(MealType::Dinner);
    planner.add_ingredient_slot();
    planner.update_ingredient_slot(1, "rice");

    planner.close_modal();

    assert!(!planner.is_modal_open());
    assert_eq!(planner.draft(), &DraftMeal::default());
}

#[test]
fn test_ingredient_slot_editing() {
    let mut planner = Planner::new(MemoryStore::new());
    assert!(!planner.can_remove_ingredient_slot());

    planner.add_ingredient_slot();
    planner.add_ingredient_slot();
    planner.update_ingredient_slot(0, "a");
    planner.update_ingredient_slot(1, "b");
    planner.update_ingredient_slot(2, "c");
    planner.update_ingredient_slot(9, "ignored");
    assert_eq!(planner.draft().ingredients, vec!["a", "b", "c"]);
    assert!(planner.can_remove_ingredient_slot());

    planner.remove_ingredient_slot(1);
    planner.remove_ingredient_slot(5);
    assert_eq!(planner.draft().ingredients, vec!["a", "c"]);

    // The data operation itself may empty the list
    planner.remove_ingredient_slot(0);
    planner.remove_ingredient_slot(0);
    assert!(planner.draft().ingredients.is_empty());
}

#[test]
fn test_save_meal_builds_meal_and_closes_form() {
    let store = MemoryStore::new();
    let mut planner = Planner::new(store.clone());

    planner.open_add_meal_modal(Weekday::Friday);
    planner.set_draft_name("Fish tacos");
    planner.set_draft_type(MealType::Dinner);
    planner.update_ingredient_slot(0, "cod");
    planner.add_ingredient_slot();
    planner.add_ingredient_slot();
    planner.update_ingredient_slot(2, "tortillas");
    planner.add_ingredient_slot();
    planner.update_ingredient_slot(3, "   ");

    let meal = planner.save_meal().cloned().expect("meal saved");

    assert_eq!(meal.name, "Fish tacos");
    assert_eq!(meal.meal_type, MealType::Dinner);
    assert_eq!(meal.day, Weekday::Friday);
    assert_eq!(meal.ingredients, vec!["cod", "tortillas"]);
    assert!(!meal.id.is_empty());
    assert!(!planner.is_modal_open());
    assert_eq!(planner.draft(), &DraftMeal::default());

    let stored = store.get(MEALS_KEY).expect("get").expect("meals written");
    let stored: Vec<Meal> = serde_json::from_str(&stored).expect("valid json");
    assert_eq!(stored, vec![meal]);
}

#[test]
fn test_save_meal_with_blank_name_is_noop() {
    let store = MemoryStore::new();
    let mut planner = Planner::new(store.clone());

    for name in ["", "   ", "\t\n"] {
        planner.open_add_meal_modal(Weekday::Monday);
        planner.set_draft_name(name);
        planner.update_ingredient_slot(0, "eggs");

        assert!(planner.save_meal().is_none());
        assert!(planner.meals().is_empty());
        assert!(planner.is_modal_open(), "blank save must not close the form");
        assert_eq!(planner.draft().ingredients, vec!["eggs"]);
    }
    assert_eq!(store.get(MEALS_KEY).expect("get"), None, "blank save must not write");
}

#[test]
fn test_save_meal_without_selected_day_is_noop() {
    let mut planner = Planner::new(MemoryStore::new());
    planner.set_draft_name("Orphan");
    assert!(planner.save_meal().is_none());
    assert!(planner.meals().is_empty());
}

#[test]
fn test_duplicate_names_and_ingredients_allowed() {
    let mut planner = Planner::new(MemoryStore::new());
    add_meal(&mut planner, Weekday::Monday, "Salad", &["lettuce", "lettuce"]);
    add_meal(&mut planner, Weekday::Monday, "Salad", &["lettuce"]);

    assert_eq!(planner.meals().len(), 2);
    assert_eq!(planner.meals()[0].ingredients, vec!["lettuce", "lettuce"]);
    assert_ne!(planner.meals()[0].id, planner.meals()[1].id);
}

#[test]
fn test_delete_meal() {
    let store = MemoryStore::new();
    let mut planner = Planner::new(store.clone());
    let first = add_meal(&mut planner, Weekday::Monday, "Oats", &["oats"]);
    let second = add_meal(&mut planner, Weekday::Tuesday, "Stew", &["beef"]);

    assert!(planner.delete_meal(&first));
    assert_eq!(planner.meals().len(), 1);
    assert_eq!(planner.meals()[0].id, second);

    let reloaded = Planner::load(store);
    assert_eq!(reloaded.meals(), planner.meals());
}

#[test]
fn test_delete_unknown_meal_leaves_meals_unchanged() {
    let mut planner = Planner::new(MemoryStore::new());
    add_meal(&mut planner, Weekday::Sunday, "Roast", &["potatoes"]);
    let before = planner.meals().to_vec();

    assert!(!planner.delete_meal("does-not-exist"));
    assert_eq!(planner.meals(), before.as_slice());
}

#[test]
fn test_generate_shopping_list_dedupes_in_order() {
    let mut planner = Planner::new(MemoryStore::new());
    add_meal(&mut planner, Weekday::Monday, "Omelette", &["eggs", "milk"]);
    add_meal(&mut planner, Weekday::Tuesday, "French toast", &["milk", "bread"]);

    planner.generate_shopping_list();

    assert_eq!(item_names(&planner), vec!["eggs", "milk", "bread"]);
    assert!(planner.shopping_list().iter().all(|i| !i.checked));
    assert_eq!(planner.active_tab(), Tab::Shopping);
}

#[test]
fn test_regenerate_discards_checked_state_and_ids() {
    let mut planner = Planner::new(MemoryStore::new());
    add_meal(&mut planner, Weekday::Monday, "Omelette", &["eggs", "milk"]);

    planner.generate_shopping_list();
    let first_ids: Vec<String> = planner.shopping_list().iter().map(|i| i.id.clone()).collect();
    let eggs = first_ids[0].clone();
    planner.toggle_shopping_item(&eggs);

    planner.generate_shopping_list();

    assert_eq!(item_names(&planner), vec!["eggs", "milk"]);
    assert!(planner.shopping_list().iter().all(|i| !i.checked));
    for item in planner.shopping_list() {
        assert!(!first_ids.contains(&item.id), "ids must be fresh");
    }
}

#[test]
fn test_shopping_list_not_regenerated_on_meal_change() {
    let mut planner = Planner::new(MemoryStore::new());
    let id = add_meal(&mut planner, Weekday::Monday, "Omelette", &["eggs"]);
    planner.generate_shopping_list();

    add_meal(&mut planner, Weekday::Monday, "Toast", &["bread"]);
    planner.delete_meal(&id);

    assert_eq!(item_names(&planner), vec!["eggs"]);
}

#[test]
fn test_toggle_shopping_item() {
    let mut planner = Planner::new(MemoryStore::new());
    add_meal(&mut planner, Weekday::Monday, "Pasta", &["pasta", "tomatoes", "basil"]);
    planner.generate_shopping_list();

    let target = planner.shopping_list()[1].id.clone();
    assert!(planner.toggle_shopping_item(&target));

    let checked: Vec<bool> = planner.shopping_list().iter().map(|i| i.checked).collect();
    assert_eq!(checked, vec![false, true, false]);
    assert_eq!(planner.shopping_progress(), (1, 3));

    assert!(planner.toggle_shopping_item(&target));
    assert!(planner.shopping_list().iter().all(|i| !i.checked));

    assert!(!planner.toggle_shopping_item("missing"));
    assert_eq!(planner.shopping_progress(), (0, 3));
}

#[test]
fn test_clear_then_generate_with_no_meals_is_empty() {
    let store = MemoryStore::new();
    let mut planner = Planner::new(store.clone());
    let id = add_meal(&mut planner, Weekday::Monday, "Pasta", &["pasta"]);
    planner.generate_shopping_list();
    planner.delete_meal(&id);

    planner.clear_shopping_list();
    assert!(planner.shopping_list().is_empty());
    assert_eq!(
        store.get(SHOPPING_LIST_KEY).expect("get").as_deref(),
        Some("[]")
    );

    planner.generate_shopping_list();
    assert!(planner.shopping_list().is_empty());
    assert_eq!(planner.shopping_progress(), (0, 0));
}

#[test]
fn test_round_trip_through_store() {
    let store = MemoryStore::new();
    let mut planner = Planner::new(store.clone());
    add_meal(&mut planner, Weekday::Monday, "Omelette", &["eggs", "milk"]);
    add_meal(&mut planner, Weekday::Saturday, "Pizza", &["dough", "cheese"]);
    planner.generate_shopping_list();
    let first = planner.shopping_list()[0].id.clone();
    planner.toggle_shopping_item(&first);

    let reloaded = Planner::load(store);

    assert_eq!(reloaded.meals(), planner.meals());
    assert_eq!(reloaded.shopping_list(), planner.shopping_list());
    // Transient state is not persisted
    assert_eq!(reloaded.active_tab(), Tab::Planner);
}

#[test]
fn test_initialize_tolerates_malformed_data_and_does_not_write() {
    let store = MemoryStore::with_entries([
        (MEALS_KEY, "definitely not json"),
        (SHOPPING_LIST_KEY, r#"[{"id":"7","name":"eggs","checked":true}]"#),
    ]);
    let planner = Planner::load(store.clone());

    assert!(planner.meals().is_empty());
    assert_eq!(planner.shopping_list().len(), 1);
    assert!(planner.shopping_list()[0].checked);
    assert_eq!(
        store.get(MEALS_KEY).expect("get").as_deref(),
        Some("definitely not json")
    );
}

#[test]
fn test_new_ids_never_repeat_loaded_ids() {
    let future = chrono::Utc::now().timestamp_millis() + 3_600_000;
    let stored = format!(
        r#"[{{"id":"{}","name":"Later","type":"snack","ingredients":[],"day":"Monday"}}]"#,
        future
    );
    let mut planner = Planner::load(MemoryStore::with_entries([(MEALS_KEY, stored)]));

    let id = add_meal(&mut planner, Weekday::Monday, "Now", &[]);
    assert!(id.parse::<i64>().expect("numeric id") > future);
}

#[test]
fn test_write_failures_keep_in_memory_state() {
    let mut planner = Planner::new(ReadOnlyStore);
    add_meal(&mut planner, Weekday::Thursday, "Burrito", &["beans"]);
    planner.generate_shopping_list();

    assert_eq!(planner.meals().len(), 1);
    assert_eq!(item_names(&planner), vec!["beans"]);
}

#[test]
fn test_tabs() {
    let mut planner = Planner::new(MemoryStore::new());
    planner.toggle_tab();
    assert_eq!(planner.active_tab(), Tab::Shopping);
    planner.switch_tab(Tab::Planner);
    assert_eq!(planner.active_tab(), Tab::Planner);
    assert_eq!(Tab::Shopping.title(), "Shopping List");
}

#[derive(Debug, Clone)]
enum Op {
    Save(usize, String),
    Delete(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..7, "[a-z ]{0,6}").prop_map(|(day, name)| Op::Save(day, name)),
        (0usize..8).prop_map(Op::Delete),
    ]
}

proptest! {
    #[test]
    fn test_meals_for_day_matches_filter(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut planner = Planner::new(MemoryStore::new());

        for op in ops {
            match op {
                Op::Save(day, name) => {
                    planner.open_add_meal_modal(Weekday::ALL[day]);
                    planner.set_draft_name(name);
                    planner.save_meal();
                    planner.close_modal();
                }
                Op::Delete(pick) => {
                    let id = planner
                        .meals()
                        .get(pick)
                        .map(|m| m.id.clone())
                        .unwrap_or_else(|| "missing".to_string());
                    planner.delete_meal(&id);
                }
            }
        }

        for day in Weekday::ALL {
            let expected: Vec<&Meal> = planner.meals().iter().filter(|m| m.day == day).collect();
            prop_assert_eq!(planner.meals_for_day(day), expected);
        }
        prop_assert!(planner.meals().iter().all(|m| !m.name.trim().is_empty()));
    }
}

#[test]
fn test_stored_max_id_does_not_break_new_ids() {
    let max_id = i64::MAX.to_string();
    let store = MemoryStore::with_entries([(
        MEALS_KEY,
        format!(
            r#"[{{"id":"{}","name":"Stew","type":"dinner","ingredients":["beef"],"day":"Monday"}}]"#,
            max_id
        ),
    )]);
    let mut planner = Planner::load(store);
    assert_eq!(planner.meals().len(), 1);

    planner.generate_shopping_list();
    let new_meal = add_meal(&mut planner, Weekday::Tuesday, "Toast", &["bread"]);

    assert_eq!(item_names(&planner), vec!["beef"]);
    assert_ne!(planner.shopping_list()[0].id, max_id);
    assert_ne!(new_meal, max_id);
    assert_eq!(planner.meals().len(), 2);
}
