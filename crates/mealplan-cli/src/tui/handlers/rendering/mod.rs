//! UI rendering coordinator
//!
//! Main entry point that dispatches to specialized render modules.

mod views;

use mealplan_core::Tab;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::tui::app::{App, Popup};
use crate::tui::components::{render_status_bar, render_tab_bar, render_toasts};

impl App {
    /// Main UI rendering dispatcher
    pub fn ui(&mut self, f: &mut Frame) {
        let bg = Block::default().style(Style::default().bg(self.theme.bg_color));
        f.render_widget(bg, f.area());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(5),    // Active view
                Constraint::Length(1), // Status bar
            ])
            .split(f.area());

        render_tab_bar(
            f,
            chunks[0],
            &self.theme,
            self.planner.active_tab(),
            self.planner.shopping_list().len(),
        );

        match self.planner.active_tab() {
            Tab::Planner => self.render_planner(f, chunks[1]),
            Tab::Shopping => self.render_shopping_list(f, chunks[1]),
        }

        render_status_bar(
            f,
            chunks[2],
            &self.theme,
            self.planner.active_tab(),
            self.planner.meals().len(),
            self.planner.shopping_progress(),
        );

        match self.popup {
            Popup::None => {}
            Popup::MealForm => self.popups.meal_form.render(
                f,
                &self.theme,
                self.planner.draft(),
                self.planner.selected_day(),
                self.planner.can_remove_ingredient_slot(),
            ),
            Popup::Help => self.popups.help.render(f, &self.theme),
        }

        // Toasts on top of everything
        render_toasts(f, &self.toasts, &self.theme);
    }
}
