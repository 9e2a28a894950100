//! Toast notifications
//!
//! Short confirmations stacked in the top-right corner after a meal is
//! saved or deleted and after the shopping list is generated or cleared.
//! The bottom border shrinks as the toast runs out of time.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::themes::Theme;
use crate::tui::utils::truncate_ellipsis;

const MAX_TOASTS: usize = 3;
const LIFETIME: Duration = Duration::from_secs(5);

/// Outer size of one toast, borders included
const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 3;

/// Rows left free at the top so toasts don't cover the tab bar
const TOP_OFFSET: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Something was added or created
    Success,
    /// Something was removed
    Info,
}

impl ToastKind {
    fn color(self, theme: &Theme) -> Color {
        match self {
            ToastKind::Success => theme.success_color,
            ToastKind::Info => theme.warning_color,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Info => "•",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    expires_at: Instant,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastKind::Info)
    }

    fn new(message: String, kind: ToastKind) -> Self {
        Self {
            message,
            kind,
            expires_at: Instant::now() + LIFETIME,
        }
    }

    fn time_left(&self, now: Instant) -> Duration {
        self.expires_at.saturating_duration_since(now)
    }
}

/// Newest toast last. Repeating a message that is still showing is a no-op.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        if self.toasts.iter().any(|t| t.message == toast.message) {
            return;
        }
        if self.toasts.len() == MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(toast);
    }

    /// Drop expired toasts. True when something disappeared.
    pub fn tick(&mut self) -> bool {
        let now = Instant::now();
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.time_left(now).is_zero());
        self.toasts.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Newest first
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().rev()
    }
}

/// Stack toasts down the right edge of the frame, newest on top
pub fn render_toasts(f: &mut Frame, queue: &ToastQueue, theme: &Theme) {
    let area = f.area();
    if queue.is_empty() || area.width < TOAST_WIDTH + 2 {
        return;
    }

    let now = Instant::now();
    let x = area.right() - TOAST_WIDTH - 2;
    let mut y = area.y + TOP_OFFSET;
    for toast in queue.visible() {
        if y + TOAST_HEIGHT > area.bottom() {
            break;
        }
        render_toast(f, Rect::new(x, y, TOAST_WIDTH, TOAST_HEIGHT), toast, now, theme);
        y += TOAST_HEIGHT + 1;
    }
}

fn render_toast(f: &mut Frame, area: Rect, toast: &Toast, now: Instant, theme: &Theme) {
    let color = toast.kind.color(theme);
    let inner_width = area.width.saturating_sub(2) as usize;

    let fraction = toast.time_left(now).as_secs_f32() / LIFETIME.as_secs_f32();
    let bar_len = ((inner_width as f32) * fraction.clamp(0.0, 1.0)).round() as usize;
    let countdown = Line::from(vec![
        Span::styled("━".repeat(bar_len), Style::default().fg(color)),
        Span::styled(
            "─".repeat(inner_width - bar_len),
            Style::default().fg(theme.dim_color),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .title_bottom(countdown)
        .style(Style::default().bg(theme.bg_color));

    // icon, space, message, one cell of right padding
    let message = truncate_ellipsis(&toast.message, inner_width.saturating_sub(4));
    let body = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {} ", toast.kind.icon()), Style::default().fg(color)),
        Span::styled(message, Style::default().fg(theme.text_color)),
    ]))
    .block(block);

    f.render_widget(Clear, area);
    f.render_widget(body, area);
}
