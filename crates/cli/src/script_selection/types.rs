//! Type definitions for the selection UI.

/// State for the UI viewport.
///
/// Tracks the visible portion of the script list when there are more
/// scripts than can fit on screen.
#[derive(Clone, PartialEq, Debug)]
pub struct ViewportState {
    pub offset: usize,
    pub height: u16,
    pub width: u16,
}

impl ViewportState {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            offset: 0,
            height,
            width,
        }
    }

    /// Number of list rows that fit, never less than one.
    #[must_use]
    pub fn rows(&self) -> usize {
        usize::from(self.height.max(1))
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Scrolls just enough to keep `cursor` on screen for a list of `len` entries.
    pub fn follow(&mut self, cursor: usize, len: usize) {
        if len == 0 {
            self.offset = 0;
            return;
        }

        let rows = self.rows();
        if cursor < self.offset {
            self.offset = cursor;
        } else if cursor >= self.offset + rows {
            self.offset = cursor + 1 - rows;
        }

        // Don't leave blank rows at the bottom when the list shrinks
        self.offset = self.offset.min(len.saturating_sub(rows));
    }

    /// Range of list indexes currently on screen.
    #[must_use]
    pub fn visible_range(&self, len: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(len);
        start..(start + self.rows()).min(len)
    }
}
