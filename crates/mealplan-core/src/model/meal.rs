//! Meals, meal types, weekdays and the add-meal draft

use std::fmt;

use serde::{Deserialize, Serialize};

/// Day of the week a meal is planned for
///
/// Serialized by its English name (`"Monday"`), which is also the stored format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days in display order
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Position in [`Weekday::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Day at a position in [`Weekday::ALL`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// All meal types in form order
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    /// Lowercase name, matching the stored format
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    /// Capitalized label for the form selector
    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }

    /// Next type, wrapping around
    pub fn next(&self) -> Self {
        let idx = (*self as usize + 1) % Self::ALL.len();
        Self::ALL[idx]
    }

    /// Previous type, wrapping around
    pub fn prev(&self) -> Self {
        let len = Self::ALL.len();
        let idx = (*self as usize + len - 1) % len;
        Self::ALL[idx]
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A planned meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub ingredients: Vec<String>,
    pub day: Weekday,
}

/// In-progress meal bound to the add-meal form. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftMeal {
    pub name: String,
    pub meal_type: MealType,
    /// Always holds at least one slot while the form is open
    pub ingredients: Vec<String>,
}

impl Default for DraftMeal {
    fn default() -> Self {
        Self {
            name: String::new(),
            meal_type: MealType::default(),
            ingredients: vec![String::new()],
        }
    }
}

impl DraftMeal {
    /// True when the name is empty or whitespace-only
    pub fn is_name_blank(&self) -> bool {
        self.name.trim().is_empty()
    }

    /// Ingredient slots with blank entries dropped, in slot order
    pub fn filled_ingredients(&self) -> Vec<String> {
        self.ingredients
            .iter()
            .filter(|i| !i.trim().is_empty())
            .cloned()
            .collect()
    }
}

/// Meals planned for `day`, in insertion order
pub fn meals_for_day(meals: &[Meal], day: Weekday) -> Vec<&Meal> {
    meals.iter().filter(|m| m.day == day).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(id: &str, day: Weekday) -> Meal {
        Meal {
            id: id.to_string(),
            name: format!("meal {}", id),
            meal_type: MealType::Dinner,
            ingredients: vec![],
            day,
        }
    }

    #[test]
    fn test_meal_json_field_names() {
        let meal = Meal {
            id: "1700000000000".to_string(),
            name: "Porridge".to_string(),
            meal_type: MealType::Breakfast,
            ingredients: vec!["oats".to_string(), "milk".to_string()],
            day: Weekday::Tuesday,
        };

        let value = serde_json::to_value(&meal).expect("serialize meal");
        assert_eq!(value["id"], "1700000000000");
        assert_eq!(value["type"], "breakfast");
        assert_eq!(value["day"], "Tuesday");
        assert_eq!(value["ingredients"][1], "milk");
    }

    #[test]
    fn test_meal_rejects_unknown_day_and_type() {
        let bad_day = r#"{"id":"1","name":"x","type":"lunch","ingredients":[],"day":"Someday"}"#;
        let bad_type = r#"{"id":"1","name":"x","type":"brunch","ingredients":[],"day":"Monday"}"#;
        assert!(serde_json::from_str::<Meal>(bad_day).is_err());
        assert!(serde_json::from_str::<Meal>(bad_type).is_err());
    }

    #[test]
    fn test_weekday_order_and_index() {
        assert_eq!(Weekday::ALL[0], Weekday::Monday);
        assert_eq!(Weekday::ALL[6], Weekday::Sunday);
        for (i, day) in Weekday::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
            assert_eq!(Weekday::from_index(i), Some(*day));
        }
        assert_eq!(Weekday::from_index(7), None);
        assert_eq!(Weekday::Friday.to_string(), "Friday");
    }

    #[test]
    fn test_meal_type_cycles() {
        assert_eq!(MealType::Breakfast.next(), MealType::Lunch);
        assert_eq!(MealType::Snack.next(), MealType::Breakfast);
        assert_eq!(MealType::Breakfast.prev(), MealType::Snack);
        assert_eq!(MealType::Dinner.label(), "Dinner");
        assert_eq!(MealType::Dinner.to_string(), "dinner");
    }

    #[test]
    fn test_draft_default_has_one_empty_slot() {
        let draft = DraftMeal::default();
        assert_eq!(draft.name, "");
        assert_eq!(draft.meal_type, MealType::Breakfast);
        assert_eq!(draft.ingredients, vec![String::new()]);
        assert!(draft.is_name_blank());
    }

    #[test]
    fn test_filled_ingredients_keeps_untrimmed_entries() {
        let draft = DraftMeal {
            name: "Toast".to_string(),
            meal_type: MealType::Breakfast,
            ingredients: vec![
                " bread".to_string(),
                "".to_string(),
                "   ".to_string(),
                "butter".to_string(),
                "butter".to_string(),
            ],
        };
        assert_eq!(
            draft.filled_ingredients(),
            vec![" bread".to_string(), "butter".to_string(), "butter".to_string()]
        );
    }

    #[test]
    fn test_meals_for_day_preserves_order() {
        let meals = vec![
            meal("1", Weekday::Monday),
            meal("2", Weekday::Sunday),
            meal("3", Weekday::Monday),
        ];

        let monday: Vec<&str> = meals_for_day(&meals, Weekday::Monday)
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(monday, vec!["1", "3"]);
        assert!(meals_for_day(&meals, Weekday::Wednesday).is_empty());
    }
}
