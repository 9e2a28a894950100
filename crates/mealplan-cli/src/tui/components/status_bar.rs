//! Status bar component - bottom bar with plan summary and shortcuts

use mealplan_core::Tab;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::themes::Theme;

/// Render the status bar at the bottom of the screen
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    tab: Tab,
    meal_count: usize,
    shopping_progress: (usize, usize), // (checked, total)
) {
    let bg = Paragraph::new("").style(Style::default().bg(theme.status_bar_bg_color));
    f.render_widget(bg, area);

    let meals_text = match meal_count {
        1 => "1 meal planned".to_string(),
        n => format!("{} meals planned", n),
    };
    let (checked, total) = shopping_progress;
    let shopping_text = format!("{}/{} items", checked, total);
    let shopping_color = if total > 0 && checked == total {
        theme.success_color
    } else {
        theme.dim_color
    };

    let left_spans = vec![
        Span::raw(" "),
        Span::styled(meals_text.clone(), Style::default().fg(theme.dim_color)),
        Span::styled(" │ ", Style::default().fg(theme.dim_color)),
        Span::styled(shopping_text.clone(), Style::default().fg(shopping_color)),
    ];
    let left_width = 1 + meals_text.width() as u16 + 3 + shopping_text.width() as u16;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(left_width), Constraint::Fill(1)])
        .split(area);

    f.render_widget(Paragraph::new(Line::from(left_spans)), chunks[0]);

    let commands = build_commands_for_width(chunks[1].width as usize, tab, theme);
    f.render_widget(
        Paragraph::new(Line::from(commands)).alignment(Alignment::Right),
        chunks[1],
    );
}

/// Shortcuts for the active tab, highest priority first
fn commands_for_tab(tab: Tab) -> &'static [(&'static str, &'static str)] {
    match tab {
        Tab::Planner => &[
            (" q ", "quit "),
            (" a ", "add "),
            (" d ", "delete "),
            (" g ", "generate "),
            (" Tab ", "shopping "),
            (" ? ", "help "),
        ],
        Tab::Shopping => &[
            (" q ", "quit "),
            (" Space ", "check "),
            (" c ", "clear "),
            (" Tab ", "plan "),
            (" ? ", "help "),
        ],
    }
}

/// Build command spans that fit in `width`, dropping the lowest priority first
fn build_commands_for_width<'a>(width: usize, tab: Tab, theme: &'a Theme) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    let mut used_width = 0;

    for (key, desc) in commands_for_tab(tab) {
        let cmd_width = key.width() + desc.width() + 1;
        if used_width + cmd_width > width {
            break;
        }
        spans.push(Span::styled(
            *key,
            Style::default().bg(theme.border_color).fg(theme.text_color),
        ));
        spans.push(Span::styled(*desc, Style::default().fg(theme.dim_color)));
        spans.push(Span::raw(" "));
        used_width += cmd_width;
    }

    spans
}
