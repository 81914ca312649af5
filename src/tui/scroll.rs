// Scroll positions and focus order for the TUI panels
//
// The logs panel is tail-anchored so new entries stay in view; the card grid
// and the detail overlay are top-anchored.

/// What a panel does with its offset when content grows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Offset moves only on request
    Top,
    /// Pinned to the newest line until the user scrolls away from it
    Tail { pinned: bool },
}

/// Offset into content of `total` units shown through a `viewport`
///
/// Units are whatever the owner scrolls by: log lines, grid rows, text lines.
#[derive(Debug, Clone)]
pub struct ScrollState {
    offset: usize,
    total: usize,
    viewport: usize,
    anchor: Anchor,
}

impl ScrollState {
    /// Tail-anchored state, pinned from the start
    pub fn new() -> Self {
        Self {
            offset: 0,
            total: 0,
            viewport: 0,
            anchor: Anchor::Tail { pinned: true },
        }
    }

    /// Top-anchored state
    pub fn manual() -> Self {
        Self {
            anchor: Anchor::Top,
            ..Self::new()
        }
    }

    /// Record the latest sizes; pinned panels jump to the new bottom
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;
        self.offset = if self.is_pinned() {
            self.max_offset()
        } else {
            self.offset.min(self.max_offset())
        };
    }

    /// Move by `delta` units, clamped to the content
    pub fn scroll_by(&mut self, delta: isize) {
        let target = self.offset.saturating_add_signed(delta);
        self.offset = target.min(self.max_offset());
        self.set_pinned(delta >= 0 && self.offset == self.max_offset());
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-(self.page() as isize));
    }

    pub fn page_down(&mut self) {
        self.scroll_by(self.page() as isize);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.set_pinned(false);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.set_pinned(true);
    }

    /// Smallest offset change that puts `index` inside the viewport
    ///
    /// Leaving the bottom this way unpins, so a selection stays on screen.
    pub fn ensure_visible(&mut self, index: usize) {
        if index < self.offset {
            self.offset = index;
        } else if self.viewport > 0 && index >= self.offset + self.viewport {
            self.offset = index + 1 - self.viewport;
        }
        let at_bottom = self.offset >= self.max_offset();
        self.set_pinned(self.is_pinned() && at_bottom);
    }

    /// Following new content (tail-anchored and at the bottom)
    pub fn is_pinned(&self) -> bool {
        matches!(self.anchor, Anchor::Tail { pinned: true })
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Half-open range of units on screen
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.offset.min(self.total);
        let end = (self.offset + self.viewport).min(self.total);
        (start, end)
    }

    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    /// Top-anchored panels ignore pinning
    fn set_pinned(&mut self, pinned: bool) {
        if let Anchor::Tail { pinned: p } = &mut self.anchor {
            *p = pinned;
        }
    }

    fn page(&self) -> usize {
        self.viewport.max(1)
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Panels that can be focused for input routing
///
/// The detail overlay is a modal, not a focusable panel: while it is open all
/// input goes to the modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusablePanel {
    /// Character card grid (default focus)
    #[default]
    Grid,
    /// System logs panel (only while shown)
    Logs,
}

impl FocusablePanel {
    /// Tab order; Logs is skipped while the panel is hidden
    pub fn next(self, logs_visible: bool) -> Self {
        match self {
            FocusablePanel::Grid if logs_visible => FocusablePanel::Logs,
            _ => FocusablePanel::Grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_state_tracks_growth() {
        let mut scroll = ScrollState::new();
        assert!(scroll.is_pinned());

        scroll.update_dimensions(10, 5);
        assert_eq!(scroll.offset(), 5);
        scroll.update_dimensions(15, 5);
        assert_eq!(scroll.offset(), 10);
    }

    #[test]
    fn test_scrolling_away_unpins_and_bottom_repins() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);

        scroll.scroll_by(-2);
        assert!(!scroll.is_pinned());
        assert_eq!(scroll.offset(), 13);

        // Growth no longer drags the view along
        scroll.update_dimensions(25, 5);
        assert_eq!(scroll.offset(), 13);

        scroll.page_down();
        scroll.page_down();
        assert!(scroll.is_pinned());
        assert_eq!(scroll.offset(), 20);
    }

    #[test]
    fn test_top_anchor_never_pins() {
        let mut scroll = ScrollState::manual();
        scroll.update_dimensions(10, 5);
        assert_eq!(scroll.offset(), 0);

        scroll.scroll_to_bottom();
        assert_eq!(scroll.offset(), 5);
        assert!(!scroll.is_pinned());

        scroll.update_dimensions(15, 5);
        assert_eq!(scroll.offset(), 5);
    }

    #[test]
    fn test_scroll_by_clamps_both_ends() {
        let mut scroll = ScrollState::manual();
        scroll.update_dimensions(8, 3);

        scroll.scroll_by(-4);
        assert_eq!(scroll.offset(), 0);
        scroll.scroll_by(100);
        assert_eq!(scroll.offset(), 5);
        assert_eq!(scroll.visible_range(), (5, 8));
    }

    #[test]
    fn test_ensure_visible_moves_minimally() {
        let mut scroll = ScrollState::manual();
        scroll.update_dimensions(10, 3);

        scroll.ensure_visible(5);
        assert_eq!(scroll.visible_range(), (3, 6));
        scroll.ensure_visible(4);
        assert_eq!(scroll.offset(), 3);
        scroll.ensure_visible(1);
        assert_eq!(scroll.offset(), 1);
    }

    #[test]
    fn test_shrinking_content_clamps_offset() {
        let mut scroll = ScrollState::manual();
        scroll.update_dimensions(10, 3);
        scroll.ensure_visible(9);
        assert_eq!(scroll.offset(), 7);

        scroll.update_dimensions(4, 3);
        assert_eq!(scroll.offset(), 1);
    }

    #[test]
    fn test_focus_order_skips_hidden_logs() {
        assert_eq!(FocusablePanel::Grid.next(true), FocusablePanel::Logs);
        assert_eq!(FocusablePanel::Logs.next(true), FocusablePanel::Grid);
        assert_eq!(FocusablePanel::Grid.next(false), FocusablePanel::Grid);
    }
}
