//! Selection and scroll position for the shopping list
//!
//! The item count comes from the planner on every call, so the cursor can
//! never disagree with the list it points into.

use std::ops::Range;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    pub selected: usize,
    /// First row drawn last frame
    top: usize,
}

impl ListCursor {
    pub fn down(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Pull the selection back onto the last item after the list shrank
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Back to the first item
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Indices to draw in `rows` lines. Scrolls only as far as needed to
    /// keep the selection on screen.
    pub fn window(&mut self, len: usize, rows: usize) -> Range<usize> {
        let rows = rows.max(1);
        self.clamp(len);

        if self.selected < self.top {
            self.top = self.selected;
        } else if self.selected >= self.top + rows {
            self.top = self.selected + 1 - rows;
        }
        self.top = self.top.min(len.saturating_sub(rows));

        self.top..(self.top + rows).min(len)
    }
}
