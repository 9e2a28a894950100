//! Planner state machine
//!
//! Owns the meals, the shopping list and the transient form state. All
//! mutations go through the methods below, and every change to `meals` or
//! `shopping_list` is written back to the store as a whole collection.
//! Operations never fail: bad input is a no-op and write failures are logged.

mod ids;
#[cfg(test)]
mod tests;

pub use ids::IdGenerator;

use crate::model::{self, DraftMeal, Meal, MealType, ShoppingItem, Weekday};
use crate::storage::{KeyValueStore, PlannerRepository};

/// Top-level tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Planner,
    Shopping,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Planner => "Weekly Plan",
            Tab::Shopping => "Shopping List",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Tab::Planner => Tab::Shopping,
            Tab::Shopping => Tab::Planner,
        }
    }
}

/// Meal planner state
pub struct Planner {
    repo: PlannerRepository,
    ids: IdGenerator,
    active_tab: Tab,
    meals: Vec<Meal>,
    shopping_list: Vec<ShoppingItem>,
    modal_open: bool,
    selected_day: Option<Weekday>,
    draft: DraftMeal,
}

impl Planner {
    /// Create an empty planner over `store` without reading from it
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            repo: PlannerRepository::new(store),
            ids: IdGenerator::new(),
            active_tab: Tab::default(),
            meals: Vec::new(),
            shopping_list: Vec::new(),
            modal_open: false,
            selected_day: None,
            draft: DraftMeal::default(),
        }
    }

    /// Create a planner and load its collections from `store`
    pub fn load(store: impl KeyValueStore + 'static) -> Self {
        let mut planner = Self::new(store);
        planner.initialize();
        planner
    }

    /// Read both collections from the store. Absent or malformed values
    /// become empty collections. Nothing is written back.
    pub fn initialize(&mut self) {
        self.meals = self.repo.load_meals();
        self.shopping_list = self.repo.load_shopping_list();

        for id in self
            .meals
            .iter()
            .map(|m| m.id.as_str())
            .chain(self.shopping_list.iter().map(|i| i.id.as_str()))
        {
            self.ids.observe(id);
        }

        tracing::info!(
            meals = self.meals.len(),
            shopping_items = self.shopping_list.len(),
            "Planner initialized"
        );
    }

    // ---- accessors ----

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn shopping_list(&self) -> &[ShoppingItem] {
        &self.shopping_list
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn selected_day(&self) -> Option<Weekday> {
        self.selected_day
    }

    pub fn draft(&self) -> &DraftMeal {
        &self.draft
    }

    // ---- tabs ----

    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn toggle_tab(&mut self) {
        self.active_tab = self.active_tab.toggle();
    }

    // ---- add-meal form ----

    /// Open the add-meal form for `day`. The draft is left as it is.
    pub fn open_add_meal_modal(&mut self, day: Weekday) {
        self.selected_day = Some(day);
        self.modal_open = true;
    }

    /// Close the form and reset the draft
    pub fn close_modal(&mut self) {
        self.modal_open = false;
        self.draft = DraftMeal::default();
    }

    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_draft_type(&mut self, meal_type: MealType) {
        self.draft.meal_type = meal_type;
    }

    pub fn add_ingredient_slot(&mut self) {
        self.draft.ingredients.push(String::new());
    }

    /// Remove the slot at `index`. Callers keep at least one slot by checking
    /// [`Planner::can_remove_ingredient_slot`] first.
    pub fn remove_ingredient_slot(&mut self, index: usize) {
        if index < self.draft.ingredients.len() {
            self.draft.ingredients.remove(index);
        }
    }

    pub fn update_ingredient_slot(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.draft.ingredients.get_mut(index) {
            *slot = value.into();
        }
    }

    /// Whether the form should offer slot removal
    pub fn can_remove_ingredient_slot(&self) -> bool {
        self.draft.ingredients.len() > 1
    }

    /// Turn the draft into a meal for the selected day.
    ///
    /// Does nothing when the name is blank or no day has been selected.
    /// On success the form is closed and the new meal is returned.
    pub fn save_meal(&mut self) -> Option<&Meal> {
        if self.draft.is_name_blank() {
            return None;
        }
        let Some(day) = self.selected_day else {
            tracing::debug!("Save requested with no selected day");
            return None;
        };

        let meal = Meal {
            id: self.ids.next_id(),
            name: self.draft.name.clone(),
            meal_type: self.draft.meal_type,
            ingredients: self.draft.filled_ingredients(),
            day,
        };
        tracing::info!(meal_id = %meal.id, day = %day, meal_type = %meal.meal_type, "Saved meal");

        self.meals.push(meal);
        self.persist_meals();
        self.close_modal();
        self.meals.last()
    }

    // ---- meals ----

    /// Remove the meal with `id`. Returns whether one was removed.
    pub fn delete_meal(&mut self, id: &str) -> bool {
        let before = self.meals.len();
        self.meals.retain(|m| m.id != id);
        let removed = self.meals.len() != before;
        if removed {
            tracing::info!(meal_id = %id, "Deleted meal");
        }
        self.persist_meals();
        removed
    }

    /// Meals planned for `day`, in insertion order
    pub fn meals_for_day(&self, day: Weekday) -> Vec<&Meal> {
        model::meals_for_day(&self.meals, day)
    }

    // ---- shopping list ----

    /// Generation is only offered while something is planned
    pub fn can_generate_shopping_list(&self) -> bool {
        !self.meals.is_empty()
    }

    /// Replace the shopping list with the unique ingredients of all meals
    /// and switch to the shopping tab. Previous checked states are dropped.
    pub fn generate_shopping_list(&mut self) {
        let names = model::unique_ingredients(&self.meals);
        self.shopping_list = names
            .into_iter()
            .map(|name| ShoppingItem::new(self.ids.next_id(), name))
            .collect();
        tracing::info!(items = self.shopping_list.len(), "Generated shopping list");

        self.persist_shopping_list();
        self.active_tab = Tab::Shopping;
    }

    /// Flip `checked` on the item with `id`. Returns whether one matched.
    pub fn toggle_shopping_item(&mut self, id: &str) -> bool {
        let found = match self.shopping_list.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.checked = !item.checked;
                true
            }
            None => false,
        };
        self.persist_shopping_list();
        found
    }

    pub fn clear_shopping_list(&mut self) {
        self.shopping_list.clear();
        tracing::info!("Cleared shopping list");
        self.persist_shopping_list();
    }

    /// `(checked, total)` item counts
    pub fn shopping_progress(&self) -> (usize, usize) {
        let checked = self.shopping_list.iter().filter(|i| i.checked).count();
        (checked, self.shopping_list.len())
    }

    // ---- persistence ----

    fn persist_meals(&self) {
        if let Err(e) = self.repo.save_meals(&self.meals) {
            tracing::warn!(error = %e, "Failed to persist meals");
        }
    }

    fn persist_shopping_list(&self) {
        if let Err(e) = self.repo.save_shopping_list(&self.shopping_list) {
            tracing::warn!(error = %e, "Failed to persist shopping list");
        }
    }
}
