//! Main TUI application
//!
//! Core application state and event loop.
//! Handler implementations are in the handlers/ module.

use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use mealplan_core::{Meal, Planner};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, sync::Arc, time::Duration};

use crate::tui::components::{Toast, ToastQueue};
use crate::tui::popups::{HelpPopup, MealFormPopup};
use crate::tui::state::{ListCursor, PlanCursor};
use crate::tui::themes::{Theme, THEME_REGISTRY};

/// Popup types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    MealForm,
    Help,
}

/// Popup states grouped together
pub struct PopupState {
    pub meal_form: MealFormPopup,
    pub help: HelpPopup,
}

/// Application state
pub struct App {
    pub planner: Planner,
    pub theme: Arc<Theme>,
    pub theme_name: String,
    pub popup: Popup,
    pub popups: PopupState,
    pub plan_cursor: PlanCursor,
    pub shopping_cursor: ListCursor,
    pub toasts: ToastQueue,
    pub should_quit: bool,
    pub needs_redraw: bool,
}

impl App {
    /// Create the app over an initialized planner
    pub fn new(planner: Planner, theme_name: &str) -> Self {
        let theme = THEME_REGISTRY.get_or_default(theme_name);
        Self {
            planner,
            theme: Arc::new(theme.clone()),
            theme_name: theme.name.clone(),
            popup: Popup::None,
            popups: PopupState {
                meal_form: MealFormPopup::new(),
                help: HelpPopup::new(),
            },
            plan_cursor: PlanCursor::new(),
            shopping_cursor: ListCursor::default(),
            toasts: ToastQueue::new(),
            should_quit: false,
            needs_redraw: true,
        }
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
        self.needs_redraw = true;
    }

    /// Meal under the plan cursor, if the selected day has any
    pub fn selected_meal(&self) -> Option<&Meal> {
        self.planner
            .meals_for_day(self.plan_cursor.weekday())
            .get(self.plan_cursor.meal)
            .copied()
    }

    /// Re-clamp cursors after the planner's collections changed
    pub fn sync_selection(&mut self) {
        let count = self.planner.meals_for_day(self.plan_cursor.weekday()).len();
        self.plan_cursor.clamp(count);
        self.shopping_cursor.clamp(self.planner.shopping_list().len());
    }

    /// Run the application
    pub async fn run(&mut self) -> Result<()> {
        tracing::info!(theme = %self.theme_name, "Starting TUI");

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        )?;
        terminal.show_cursor()?;
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        loop {
            if self.toasts.tick() {
                self.needs_redraw = true;
            }
            // Countdown bars animate while toasts are visible
            if !self.toasts.is_empty() {
                self.needs_redraw = true;
            }

            if self.needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased;

                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(e)) => {
                            tracing::error!(error = %e, "Terminal event stream error");
                            self.should_quit = true;
                        }
                        None => self.should_quit = true,
                    }
                }
                _ = tokio::time::sleep(Duration::from_millis(16)) => {}
            }

            if self.should_quit {
                tracing::info!("Quitting");
                break;
            }
        }
        Ok(())
    }

    /// Route a terminal event to its handler
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                self.handle_key(key);
                self.needs_redraw = true;
            }
            Event::Paste(text) => {
                self.handle_paste(text);
                self.needs_redraw = true;
            }
            Event::Resize(_, _) => {
                self.needs_redraw = true;
            }
            _ => {}
        }
    }
}
