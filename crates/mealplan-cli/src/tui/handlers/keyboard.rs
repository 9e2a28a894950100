//! Keyboard event handlers
//!
//! Main keyboard input handling. Popup-specific key handlers are in popup_keys/.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use mealplan_core::Tab;

use crate::tui::app::{App, Popup};
use crate::tui::components::Toast;

impl App {
    /// Main keyboard event dispatcher
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        let code = key_event.code;
        let modifiers = key_event.modifiers;
        let is_press =
            key_event.kind == KeyEventKind::Press || key_event.kind == KeyEventKind::Repeat;
        if !is_press {
            return;
        }

        if self.popup != Popup::None {
            self.handle_popup_key(code, modifiers);
            return;
        }

        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        match code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.planner.toggle_tab();
                self.sync_selection();
                return;
            }
            KeyCode::Char('?') => {
                self.popups.help.reset();
                self.popup = Popup::Help;
                return;
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        match self.planner.active_tab() {
            Tab::Planner => self.handle_planner_key(code),
            Tab::Shopping => self.handle_shopping_key(code),
        }
    }

    fn handle_planner_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('h') => self.plan_cursor.prev_day(),
            KeyCode::Right | KeyCode::Char('l') => self.plan_cursor.next_day(),
            KeyCode::Up | KeyCode::Char('k') => self.plan_cursor.prev_meal(),
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self.planner.meals_for_day(self.plan_cursor.weekday()).len();
                self.plan_cursor.next_meal(count);
            }
            KeyCode::Char('a') | KeyCode::Enter => {
                self.planner.open_add_meal_modal(self.plan_cursor.weekday());
                self.popups.meal_form.reset();
                self.popup = Popup::MealForm;
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                let Some((id, name)) = self
                    .selected_meal()
                    .map(|m| (m.id.clone(), m.name.clone()))
                else {
                    return;
                };
                if self.planner.delete_meal(&id) {
                    self.show_toast(Toast::info(format!("Deleted {}", name)));
                }
                self.sync_selection();
            }
            KeyCode::Char('g') => {
                if !self.planner.can_generate_shopping_list() {
                    return;
                }
                self.planner.generate_shopping_list();
                let count = self.planner.shopping_list().len();
                self.shopping_cursor.reset();
                self.show_toast(Toast::success(format!(
                    "Shopping list generated ({} items)",
                    count
                )));
            }
            _ => {}
        }
    }

    fn handle_shopping_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.shopping_cursor.up(),
            KeyCode::Down | KeyCode::Char('j') => {
                self.shopping_cursor.down(self.planner.shopping_list().len())
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                let id = self
                    .planner
                    .shopping_list()
                    .get(self.shopping_cursor.selected)
                    .map(|item| item.id.clone());
                if let Some(id) = id {
                    self.planner.toggle_shopping_item(&id);
                }
            }
            KeyCode::Char('c') => {
                // Only offered while there is something to clear
                if self.planner.shopping_list().is_empty() {
                    return;
                }
                self.planner.clear_shopping_list();
                self.sync_selection();
                self.show_toast(Toast::info("Shopping list cleared"));
            }
            _ => {}
        }
    }
}
