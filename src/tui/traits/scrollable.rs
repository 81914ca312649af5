//! Scrolling and selection over a component's own `ScrollState`

use super::Component;
use crate::tui::scroll::ScrollState;

/// A component whose content is taller than its area
///
/// Every movement goes through the owned `ScrollState`; the defaults only
/// forward.
pub trait Scrollable: Component {
    fn scroll_state(&self) -> &ScrollState;

    fn scroll_state_mut(&mut self) -> &mut ScrollState;

    fn scroll_by(&mut self, delta: isize) {
        self.scroll_state_mut().scroll_by(delta);
    }

    fn scroll_up(&mut self) {
        self.scroll_by(-1);
    }

    fn scroll_down(&mut self) {
        self.scroll_by(1);
    }

    fn page_up(&mut self) {
        self.scroll_state_mut().page_up();
    }

    fn page_down(&mut self) {
        self.scroll_state_mut().page_down();
    }

    fn scroll_to_top(&mut self) {
        self.scroll_state_mut().scroll_to_top();
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_state_mut().scroll_to_bottom();
    }

    /// Content and viewport sizes, in the component's scroll units
    fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.scroll_state_mut().update_dimensions(total, viewport);
    }
}

/// A scrollable component with a highlighted item (grid card, log entry)
///
/// `select` must clamp and keep the item visible; the movement defaults rely
/// on it.
pub trait Selectable: Scrollable {
    fn selected_index(&self) -> Option<usize>;

    fn select(&mut self, index: usize);

    fn item_count(&self) -> usize;

    /// One forward; starts at the first item when nothing is selected
    fn select_next(&mut self) {
        match self.selected_index() {
            Some(current) if current + 1 < self.item_count() => self.select(current + 1),
            None => self.select_first(),
            _ => {}
        }
    }

    /// One back; starts at the last item when nothing is selected
    fn select_previous(&mut self) {
        match self.selected_index() {
            Some(current) if current > 0 => self.select(current - 1),
            None => self.select_last(),
            _ => {}
        }
    }

    fn select_first(&mut self) {
        if self.item_count() > 0 {
            self.select(0);
        }
    }

    fn select_last(&mut self) {
        if let Some(last) = self.item_count().checked_sub(1) {
            self.select(last);
        }
    }
}
