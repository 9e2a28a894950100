//! Popup frame shared by the meal form and help

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding},
    Frame,
};

use crate::tui::themes::Theme;

/// Centered rect of at most `width` x `height`, leaving a small gap to the
/// terminal edge when the terminal is smaller than that
pub fn popup_area(area: Rect, (width, height): (u16, u16)) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

/// Clear the popup area and draw its border with `title` centered on top.
/// Returns the area inside the border.
pub fn open_popup(f: &mut Frame, theme: &Theme, size: (u16, u16), title: &str) -> Rect {
    let area = popup_area(f.area(), size);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent_color))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(theme.title_color)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .padding(Padding::top(1))
        .style(Style::default().bg(theme.bg_color));

    let inner = block.inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    inner
}

/// "▲ 3 more" / "▼ 3 more" marker for rows scrolled out of view
pub fn overflow_line(hidden: usize, above: bool, theme: &Theme) -> Line<'static> {
    let arrow = if above { '▲' } else { '▼' };
    Line::from(Span::styled(
        format!("{} {} more", arrow, hidden),
        Style::default().fg(theme.dim_color),
    ))
}
