//! Popup keyboard event handlers
//!
//! Handles keyboard input for all popup dialogs.
//! Each popup type with non-trivial input has its own module.

mod meal_form;

use crossterm::event::{KeyCode, KeyModifiers};

use crate::tui::app::{App, Popup};

impl App {
    /// Handle keyboard events when a popup is open
    pub fn handle_popup_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match self.popup {
            Popup::Help => match code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.popup = Popup::None
                }
                KeyCode::Up | KeyCode::Char('k') => self.popups.help.scroll_up(),
                KeyCode::Down | KeyCode::Char('j') => self.popups.help.scroll_down(),
                _ => {}
            },
            Popup::MealForm => self.handle_meal_form_key(code, modifiers),
            Popup::None => {}
        }
    }

    /// Handle pasted text (bracketed paste)
    pub fn handle_paste(&mut self, text: String) {
        if self.popup == Popup::MealForm {
            self.paste_into_meal_form(&text);
        }
    }
}
