//! Tab bar - top bar with the app title and the two tabs

use mealplan_core::Tab;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::themes::Theme;

const TABS: [Tab; 2] = [Tab::Planner, Tab::Shopping];

/// Render the tab bar at the top of the screen
pub fn render_tab_bar(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    active: Tab,
    shopping_count: usize,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_color))
        .style(Style::default().bg(theme.bg_color));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Fill(1)])
        .split(inner);

    let title = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            "Meal Planner",
            Style::default()
                .fg(theme.title_color)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(title), chunks[0]);

    let mut spans = Vec::new();
    for tab in TABS {
        let label = match tab {
            Tab::Shopping if shopping_count > 0 => {
                format!(" {} ({}) ", tab.title(), shopping_count)
            }
            _ => format!(" {} ", tab.title()),
        };
        let style = if tab == active {
            Style::default()
                .bg(theme.accent_color)
                .fg(theme.bg_color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim_color)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Right),
        chunks[1],
    );
}
