//! Help popup listing key bindings

use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::common::{open_popup, overflow_line};
use crate::tui::themes::Theme;

const HELP_SIZE: (u16, u16) = (70, 28);

/// Key binding sections shown in the popup
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("Tab", "Switch between Weekly Plan and Shopping List"),
            ("?", "Show this help"),
            ("q / Ctrl+Q", "Quit"),
        ],
    ),
    (
        "Weekly Plan",
        &[
            ("←/→", "Select day"),
            ("↑/↓", "Select meal"),
            ("a / Enter", "Add a meal to the selected day"),
            ("d / Del", "Delete the selected meal"),
            ("g", "Generate shopping list"),
        ],
    ),
    (
        "Shopping List",
        &[
            ("↑/↓", "Select item"),
            ("Space / Enter", "Check or uncheck item"),
            ("c", "Clear list"),
        ],
    ),
    (
        "Add Meal",
        &[
            ("Tab / Shift+Tab", "Move between fields"),
            ("←/→", "Change meal type"),
            ("Ctrl+N", "Add ingredient"),
            ("Ctrl+D", "Remove focused ingredient"),
            ("Enter", "Save meal"),
            ("Esc", "Cancel"),
        ],
    ),
];

/// Help popup state. Scrolls the whole text, there is no selection.
pub struct HelpPopup {
    offset: usize,
    /// Largest offset that still fills the view, as of the last render
    max_offset: usize,
}

impl Default for HelpPopup {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpPopup {
    pub fn new() -> Self {
        Self {
            offset: 0,
            max_offset: line_count(),
        }
    }

    pub fn scroll_down(&mut self) {
        if self.offset < self.max_offset {
            self.offset += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    pub fn render(&mut self, f: &mut Frame, theme: &Theme) {
        let inner = open_popup(f, theme, HELP_SIZE, "Keyboard Shortcuts");
        let [body, footer_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(2)]).areas(inner);

        // Two rows kept for the overflow markers
        let rows = (body.height as usize).saturating_sub(2).max(1);
        let total = line_count();
        self.max_offset = total.saturating_sub(rows);
        self.offset = self.offset.min(self.max_offset);

        let mut lines = Vec::new();
        if self.offset > 0 {
            lines.push(overflow_line(self.offset, true, theme));
        }
        lines.extend(help_lines(theme).into_iter().skip(self.offset).take(rows));
        let below = total.saturating_sub(self.offset + rows);
        if below > 0 {
            lines.push(overflow_line(below, false, theme));
        }
        f.render_widget(Paragraph::new(lines), body.inner(Margin::new(3, 0)));

        let key = Style::default()
            .fg(theme.accent_color)
            .add_modifier(Modifier::BOLD);
        let text = Style::default().fg(theme.text_color);
        let footer = Paragraph::new(Line::from(vec![
            Span::styled("↑↓", key),
            Span::styled(": scroll  ", text),
            Span::styled("Esc", key),
            Span::styled(": close", text),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(footer, footer_area);
    }
}

/// Section header, bindings and a blank line per section
fn line_count() -> usize {
    SECTIONS
        .iter()
        .map(|(_, bindings)| bindings.len() + 2)
        .sum()
}

fn help_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (section, bindings) in SECTIONS {
        lines.push(Line::from(Span::styled(
            section.to_string(),
            Style::default()
                .fg(theme.title_color)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, desc) in bindings.iter() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<16}", key),
                    Style::default().fg(theme.accent_color),
                ),
                Span::styled(desc.to_string(), Style::default().fg(theme.text_color)),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines
}
