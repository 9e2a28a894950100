//! View rendering
//!
//! Renders the two tab views: the weekly plan and the shopping list.

use mealplan_core::{Meal, Weekday};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::App;
use crate::tui::popups::common::overflow_line;
use crate::tui::themes::Theme;
use crate::tui::utils::truncate_ellipsis;

/// Narrowest day card before the grid drops a column
const MIN_CARD_WIDTH: u16 = 30;

/// Most day cards side by side
const MAX_CARD_COLUMNS: u16 = 4;

impl App {
    /// Render the weekly plan: one card per day plus the generate hint
    pub fn render_planner(&self, f: &mut Frame, area: Rect) {
        let can_generate = self.planner.can_generate_shopping_list();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(if can_generate { 1 } else { 0 }),
            ])
            .split(area);

        let columns = (chunks[0].width / MIN_CARD_WIDTH).clamp(1, MAX_CARD_COLUMNS) as usize;
        let rows = Weekday::ALL.len().div_ceil(columns);

        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
            .split(chunks[0]);

        for (row, row_area) in row_areas.iter().enumerate() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(*row_area);

            for (col, cell) in cells.iter().enumerate() {
                let Some(day) = Weekday::from_index(row * columns + col) else {
                    continue;
                };
                self.render_day_card(f, *cell, day);
            }
        }

        if can_generate {
            let hint = Line::from(vec![
                Span::styled(
                    " g ",
                    Style::default()
                        .bg(self.theme.accent_color)
                        .fg(self.theme.bg_color)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    " Generate Shopping List",
                    Style::default().fg(self.theme.accent_color),
                ),
            ]);
            f.render_widget(Paragraph::new(hint).alignment(Alignment::Center), chunks[1]);
        }
    }

    fn render_day_card(&self, f: &mut Frame, area: Rect, day: Weekday) {
        let theme = &self.theme;
        let is_selected_day = self.plan_cursor.day == day.index();

        let (border_color, title_style) = if is_selected_day {
            (
                theme.accent_color,
                Style::default()
                    .fg(theme.title_color)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (theme.border_color, Style::default().fg(theme.text_color))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(format!(" {} ", day), title_style))
            .style(Style::default().bg(theme.bg_color));
        let inner = block.inner(area);
        f.render_widget(block, area);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let meals = self.planner.meals_for_day(day);
        let mut lines = Vec::new();

        if meals.is_empty() {
            lines.push(Line::from(Span::styled(
                "No meals planned",
                Style::default()
                    .fg(theme.dim_color)
                    .add_modifier(Modifier::ITALIC),
            )));
        } else {
            let height = inner.height as usize;
            let selected = is_selected_day.then_some(self.plan_cursor.meal);
            // Last row becomes the overflow indicator when meals are cut off
            let rows = if meals.len() <= height {
                height
            } else {
                height.saturating_sub(1).max(1)
            };
            let offset = match selected {
                Some(i) if i >= rows => i + 1 - rows,
                _ => 0,
            };
            let end = (offset + rows).min(meals.len());

            for (i, meal) in meals.iter().enumerate().take(end).skip(offset) {
                lines.push(meal_line(
                    meal,
                    selected == Some(i),
                    inner.width as usize,
                    theme,
                ));
            }
            let remaining = meals.len() - end;
            if remaining > 0 {
                lines.push(overflow_line(remaining, false, theme));
            }
        }

        if is_selected_day && lines.len() < inner.height as usize {
            lines.push(Line::from(Span::styled(
                "+ Add Meal (a)",
                Style::default().fg(theme.dim_color),
            )));
        }

        f.render_widget(Paragraph::new(lines), inner);
    }

    /// Render the shopping list tab
    pub fn render_shopping_list(&mut self, f: &mut Frame, area: Rect) {
        let theme = self.theme.clone();
        let (checked, total) = self.planner.shopping_progress();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border_color))
            .title(Span::styled(
                format!(" Shopping List {}/{} ", checked, total),
                Style::default()
                    .fg(theme.title_color)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(theme.bg_color));
        let inner = block.inner(area);
        f.render_widget(block, area);

        if self.planner.shopping_list().is_empty() {
            let top = inner.height.saturating_sub(3) / 2;
            let mut lines = vec![Line::from(""); top as usize];
            lines.push(Line::from(Span::styled(
                "No items in your shopping list",
                Style::default()
                    .fg(theme.text_color)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Add meals to your planner and generate a list",
                Style::default().fg(theme.dim_color),
            )));
            f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let items = self.planner.shopping_list();
        // Two rows reserved for the overflow markers
        let rows = (chunks[0].height as usize).saturating_sub(2);
        let window = self.shopping_cursor.window(items.len(), rows);
        let width = chunks[0].width as usize;
        let mut lines = Vec::new();

        if window.start > 0 {
            lines.push(overflow_line(window.start, true, &theme));
        }
        for (idx, item) in items.iter().enumerate().take(window.end).skip(window.start) {
            let is_selected = idx == self.shopping_cursor.selected;

            let mut style = if item.checked {
                Style::default()
                    .fg(theme.dim_color)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(theme.text_color)
            };
            if is_selected {
                style = style.bg(theme.highlight_bg_color);
            }
            let check_color = if item.checked {
                theme.success_color
            } else {
                theme.dim_color
            };
            let mut check_style = Style::default().fg(check_color);
            if is_selected {
                check_style = check_style.bg(theme.highlight_bg_color);
            }

            let checkbox = if item.checked { "[x] " } else { "[ ] " };
            let name_width = width.saturating_sub(checkbox.width() + 1);
            let name = truncate_ellipsis(&item.name, name_width);
            lines.push(Line::from(vec![
                Span::styled(checkbox, check_style),
                Span::styled(name, style),
            ]));
        }
        let below = items.len() - window.end;
        if below > 0 {
            lines.push(overflow_line(below, false, &theme));
        }
        f.render_widget(Paragraph::new(lines), chunks[0]);

        let footer = Line::from(vec![
            Span::styled(
                " c ",
                Style::default().bg(theme.border_color).fg(theme.text_color),
            ),
            Span::styled(" Clear Shopping List", Style::default().fg(theme.dim_color)),
        ]);
        f.render_widget(Paragraph::new(footer).alignment(Alignment::Right), chunks[1]);
    }
}

fn meal_line(meal: &Meal, selected: bool, width: usize, theme: &Theme) -> Line<'static> {
    let type_label = format!(" {}", meal.meal_type);
    let prefix = if selected { "▶ " } else { "  " };
    let name_width = width.saturating_sub(prefix.width() + type_label.width());
    let name = truncate_ellipsis(&meal.name, name_width);

    let name_style = if selected {
        Style::default()
            .fg(theme.accent_color)
            .bg(theme.highlight_bg_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_color)
    };

    Line::from(vec![
        Span::styled(prefix, Style::default().fg(theme.accent_color)),
        Span::styled(name, name_style),
        Span::styled(type_label, Style::default().fg(theme.dim_color)),
    ])
}
