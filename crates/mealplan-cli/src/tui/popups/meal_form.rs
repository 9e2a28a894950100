//! Add-meal form popup
//!
//! The draft itself lives in the planner. This popup only tracks which
//! field has focus and draws the form.

use mealplan_core::{DraftMeal, MealType, Weekday};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::common::{open_popup, overflow_line};
use crate::tui::themes::Theme;
use crate::tui::utils::truncate_ellipsis;

const FORM_SIZE: (u16, u16) = (60, 22);

/// Horizontal inset of the fields from the popup border
const FIELD_MARGIN: Margin = Margin::new(3, 0);

/// Focusable form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Type,
    Ingredient(usize),
}

/// Meal form popup state
#[derive(Debug, Default)]
pub struct MealFormPopup {
    focus: FormField,
}

impl MealFormPopup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    /// Put focus back on the name field
    pub fn reset(&mut self) {
        self.focus = FormField::Name;
    }

    pub fn focus_ingredient(&mut self, index: usize) {
        self.focus = FormField::Ingredient(index);
    }

    /// Move focus forward: name, type, then each ingredient slot, wrapping
    pub fn next_focus(&mut self, slot_count: usize) {
        self.focus = match self.focus {
            FormField::Name => FormField::Type,
            FormField::Type if slot_count > 0 => FormField::Ingredient(0),
            FormField::Type => FormField::Name,
            FormField::Ingredient(i) if i + 1 < slot_count => FormField::Ingredient(i + 1),
            FormField::Ingredient(_) => FormField::Name,
        };
    }

    pub fn prev_focus(&mut self, slot_count: usize) {
        self.focus = match self.focus {
            FormField::Name if slot_count > 0 => FormField::Ingredient(slot_count - 1),
            FormField::Name => FormField::Type,
            FormField::Type => FormField::Name,
            FormField::Ingredient(0) => FormField::Type,
            FormField::Ingredient(i) => FormField::Ingredient(i - 1),
        };
    }

    /// Keep ingredient focus on an existing slot after removal
    pub fn clamp_focus(&mut self, slot_count: usize) {
        if let FormField::Ingredient(i) = self.focus {
            if slot_count == 0 {
                self.focus = FormField::Type;
            } else if i >= slot_count {
                self.focus = FormField::Ingredient(slot_count - 1);
            }
        }
    }

    pub fn render(
        &self,
        f: &mut Frame,
        theme: &Theme,
        draft: &DraftMeal,
        day: Option<Weekday>,
        can_remove_slot: bool,
    ) {
        let title = match day {
            Some(day) => format!("Add Meal for {}", day),
            None => "Add Meal".to_string(),
        };
        let inner = open_popup(f, theme, FORM_SIZE, &title);
        let [header, ingredients, footer_area] = Layout::vertical([
            Constraint::Length(4), // Name + type
            Constraint::Min(3),    // Ingredients
            Constraint::Length(2), // Footer
        ])
        .areas(inner);

        let header = header.inner(FIELD_MARGIN);
        let field_width = header.width as usize;
        let header_lines = vec![
            label_line("Meal Name", self.focus == FormField::Name, theme),
            input_line(
                &draft.name,
                "e.g. Spaghetti Bolognese",
                self.focus == FormField::Name,
                field_width,
                theme,
            ),
            label_line("Meal Type", self.focus == FormField::Type, theme),
            type_selector(draft.meal_type, self.focus == FormField::Type, theme),
        ];
        f.render_widget(Paragraph::new(header_lines), header);

        self.render_ingredients(f, ingredients.inner(FIELD_MARGIN), theme, draft);

        let mut footer = vec![
            key_span("Tab", theme),
            Span::styled(": next  ", Style::default().fg(theme.text_color)),
            key_span("^N", theme),
            Span::styled(": add  ", Style::default().fg(theme.text_color)),
        ];
        if can_remove_slot {
            footer.push(key_span("^D", theme));
            footer.push(Span::styled(
                ": remove  ",
                Style::default().fg(theme.text_color),
            ));
        }
        footer.extend([
            key_span("Enter", theme),
            Span::styled(": save  ", Style::default().fg(theme.text_color)),
            key_span("Esc", theme),
            Span::styled(": cancel", Style::default().fg(theme.text_color)),
        ]);
        let footer = Paragraph::new(Line::from(footer)).alignment(Alignment::Center);
        f.render_widget(footer, footer_area);
    }

    fn render_ingredients(&self, f: &mut Frame, area: Rect, theme: &Theme, draft: &DraftMeal) {
        let focused_slot = match self.focus {
            FormField::Ingredient(i) => Some(i),
            _ => None,
        };

        // One line for the label, two for the overflow markers
        let visible = (area.height as usize).saturating_sub(3).max(1);
        let total = draft.ingredients.len();
        let offset = match focused_slot {
            Some(i) if i >= visible => i + 1 - visible,
            _ => 0,
        };
        let end = (offset + visible).min(total);

        let mut lines = vec![label_line("Ingredients", focused_slot.is_some(), theme)];
        if offset > 0 {
            lines.push(overflow_line(offset, true, theme));
        }
        for (idx, value) in draft.ingredients.iter().enumerate().take(end).skip(offset) {
            let focused = focused_slot == Some(idx);
            let marker_style = if focused {
                Style::default().fg(theme.accent_color)
            } else {
                Style::default().fg(theme.dim_color)
            };
            let mut spans = vec![Span::styled(format!("{:>2}. ", idx + 1), marker_style)];
            let input = input_line(
                value,
                "Ingredient",
                focused,
                (area.width as usize).saturating_sub(4),
                theme,
            );
            spans.extend(input.spans);
            lines.push(Line::from(spans));
        }
        if total > end {
            lines.push(overflow_line(total - end, false, theme));
        }

        f.render_widget(Paragraph::new(lines), area);
    }
}

fn key_span(key: &'static str, theme: &Theme) -> Span<'static> {
    Span::styled(
        key,
        Style::default()
            .fg(theme.accent_color)
            .add_modifier(Modifier::BOLD),
    )
}

fn label_line(label: &str, focused: bool, theme: &Theme) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(theme.accent_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.dim_color)
    };
    Line::from(Span::styled(label.to_string(), style))
}

fn input_line(
    value: &str,
    placeholder: &str,
    focused: bool,
    width: usize,
    theme: &Theme,
) -> Line<'static> {
    let mut spans = Vec::new();
    if value.is_empty() && !focused {
        spans.push(Span::styled(
            placeholder.to_string(),
            Style::default()
                .fg(theme.dim_color)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        let style = if focused {
            Style::default()
                .fg(theme.text_color)
                .bg(theme.highlight_bg_color)
        } else {
            Style::default().fg(theme.text_color)
        };
        spans.push(Span::styled(
            truncate_tail(value, width.saturating_sub(1)),
            style,
        ));
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(theme.accent_color)));
        }
    }
    Line::from(spans)
}

/// Keep the end of long input visible while typing
fn truncate_tail(value: &str, width: usize) -> String {
    let reversed: String = value.chars().rev().collect();
    let cut = truncate_ellipsis(&reversed, width);
    cut.chars().rev().collect()
}

fn type_selector(current: MealType, focused: bool, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    if focused {
        spans.push(Span::styled("◀ ", Style::default().fg(theme.accent_color)));
    }
    for (i, meal_type) in MealType::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if *meal_type == current {
            Style::default()
                .fg(theme.bg_color)
                .bg(theme.accent_color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim_color)
        };
        spans.push(Span::styled(format!(" {} ", meal_type.label()), style));
    }
    if focused {
        spans.push(Span::styled(" ▶", Style::default().fg(theme.accent_color)));
    }
    Line::from(spans)
}
