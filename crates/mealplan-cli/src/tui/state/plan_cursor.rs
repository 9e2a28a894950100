//! Cursor over the weekly plan
//!
//! Selects a day card and, within it, one of that day's meals.

use mealplan_core::Weekday;

/// Selected day and meal in the weekly plan view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanCursor {
    /// Index into `Weekday::ALL`
    pub day: usize,
    /// Index into the selected day's meals
    pub meal: usize,
}

impl PlanCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected day
    pub fn weekday(&self) -> Weekday {
        Weekday::from_index(self.day).unwrap_or(Weekday::Monday)
    }

    /// Move to the next day (stops at Sunday)
    pub fn next_day(&mut self) {
        if self.day + 1 < Weekday::ALL.len() {
            self.day += 1;
            self.meal = 0;
        }
    }

    /// Move to the previous day (stops at Monday)
    pub fn prev_day(&mut self) {
        if self.day > 0 {
            self.day -= 1;
            self.meal = 0;
        }
    }

    /// Move to the next meal of the selected day
    pub fn next_meal(&mut self, meal_count: usize) {
        if self.meal + 1 < meal_count {
            self.meal += 1;
        }
    }

    pub fn prev_meal(&mut self) {
        self.meal = self.meal.saturating_sub(1);
    }

    /// Keep the meal index valid after the day's meals changed
    pub fn clamp(&mut self, meal_count: usize) {
        if self.meal >= meal_count {
            self.meal = meal_count.saturating_sub(1);
        }
    }
}
