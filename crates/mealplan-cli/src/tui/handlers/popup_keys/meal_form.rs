//! Add-meal form key handling
//!
//! Edits go straight to the planner's draft through its setters, so the
//! popup and the planner never disagree about what the form holds.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::tui::app::{App, Popup};
use crate::tui::components::Toast;
use crate::tui::popups::FormField;

impl App {
    pub(super) fn handle_meal_form_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let slot_count = self.planner.draft().ingredients.len();
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);

        match code {
            KeyCode::Esc => self.cancel_meal_form(),
            KeyCode::Enter => self.submit_meal_form(),
            KeyCode::Tab | KeyCode::Down => self.popups.meal_form.next_focus(slot_count),
            KeyCode::BackTab | KeyCode::Up => self.popups.meal_form.prev_focus(slot_count),
            KeyCode::Char('n') if ctrl => {
                self.planner.add_ingredient_slot();
                let last = self.planner.draft().ingredients.len() - 1;
                self.popups.meal_form.focus_ingredient(last);
            }
            KeyCode::Char('d') if ctrl => self.remove_focused_slot(),
            KeyCode::Left if self.popups.meal_form.focus() == FormField::Type => {
                let prev = self.planner.draft().meal_type.prev();
                self.planner.set_draft_type(prev);
            }
            KeyCode::Right if self.popups.meal_form.focus() == FormField::Type => {
                let next = self.planner.draft().meal_type.next();
                self.planner.set_draft_type(next);
            }
            KeyCode::Backspace => self.edit_focused_field(|value| {
                value.pop();
            }),
            KeyCode::Char(c) if !ctrl => self.edit_focused_field(|value| value.push(c)),
            _ => {}
        }
    }

    pub(super) fn paste_into_meal_form(&mut self, text: &str) {
        // Fields are single-line
        let cleaned: String = text.chars().filter(|c| !c.is_control()).collect();
        self.edit_focused_field(|value| value.push_str(&cleaned));
    }

    fn cancel_meal_form(&mut self) {
        self.planner.close_modal();
        self.popups.meal_form.reset();
        self.popup = Popup::None;
    }

    fn submit_meal_form(&mut self) {
        let saved = self
            .planner
            .save_meal()
            .map(|meal| (meal.name.clone(), meal.day));

        match saved {
            Some((name, day)) => {
                self.popups.meal_form.reset();
                self.popup = Popup::None;
                // Land the cursor on the new meal
                if day.index() == self.plan_cursor.day {
                    let count = self.planner.meals_for_day(day).len();
                    self.plan_cursor.meal = count.saturating_sub(1);
                }
                self.show_toast(Toast::success(format!("Added {} to {}", name, day)));
            }
            // Blank name: keep the form open on the name field
            None => self.popups.meal_form.reset(),
        }
    }

    fn remove_focused_slot(&mut self) {
        let FormField::Ingredient(index) = self.popups.meal_form.focus() else {
            return;
        };
        if !self.planner.can_remove_ingredient_slot() {
            return;
        }
        self.planner.remove_ingredient_slot(index);
        let slot_count = self.planner.draft().ingredients.len();
        self.popups.meal_form.clamp_focus(slot_count);
    }

    /// Apply `edit` to the text of the focused field, if it is a text field
    fn edit_focused_field(&mut self, edit: impl FnOnce(&mut String)) {
        match self.popups.meal_form.focus() {
            FormField::Name => {
                let mut name = self.planner.draft().name.clone();
                edit(&mut name);
                self.planner.set_draft_name(name);
            }
            FormField::Ingredient(index) => {
                let Some(current) = self.planner.draft().ingredients.get(index) else {
                    return;
                };
                let mut value = current.clone();
                edit(&mut value);
                self.planner.update_ingredient_slot(index, value);
            }
            FormField::Type => {}
        }
    }
}
