//! Scrollbar drawn over the right border of a panel
//!
//! Panels pass their `ScrollState`; the bar is skipped while everything fits.

use crate::tui::scroll::ScrollState;
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

#[derive(Debug, Clone, Copy, Default)]
pub enum ScrollbarStyle {
    /// ↑ ↓ caps; used by the detail overlay, where scrolling is the main action
    Arrows,
    /// Thumb only; used by the grid and logs panel
    #[default]
    Minimal,
}

/// Draw the bar for `scroll` in `area`'s right border, thumb in `color`
pub fn render_scrollbar(
    f: &mut Frame,
    area: Rect,
    scroll: &ScrollState,
    style: ScrollbarStyle,
    color: Color,
) {
    let Some(mut state) = bar_state(scroll) else {
        return;
    };

    let (begin, end) = match style {
        ScrollbarStyle::Arrows => (Some("↑"), Some("↓")),
        ScrollbarStyle::Minimal => (None, None),
    };
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(begin)
        .end_symbol(end)
        .thumb_style(Style::default().fg(color));

    // Stay inside the corners so the block's title and bottom hint survive
    let track = area.inner(Margin {
        vertical: 1,
        horizontal: 0,
    });
    f.render_stateful_widget(scrollbar, track, &mut state);
}

/// Scroll range and position, `None` when the content fits
fn bar_state(scroll: &ScrollState) -> Option<ScrollbarState> {
    if !scroll.needs_scrollbar() {
        return None;
    }
    let range = scroll.total().saturating_sub(scroll.viewport());
    Some(ScrollbarState::new(range).position(scroll.offset()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_bar_when_content_fits() {
        let mut scroll = ScrollState::manual();
        scroll.update_dimensions(4, 10);
        assert!(bar_state(&scroll).is_none());

        scroll.update_dimensions(30, 10);
        assert!(bar_state(&scroll).is_some());
    }
}
