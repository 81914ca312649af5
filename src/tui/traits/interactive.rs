//! Keyboard handling for focusable components

use super::{Component, Scrollable};
use crossterm::event::{KeyCode, KeyEvent};

/// Whether a component used a key
///
/// `No` hands the key back to the App, which may apply a fallback (Esc on an
/// idle grid clears the filter, for instance).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Yes,
    No,
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// A component that takes keys while focused
///
/// Keys reach it last:
///
/// ```text
/// modal (detail / help) → filter input → global keys → focused component
/// ```
pub trait Interactive: Component {
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Key hints shown in the status bar while focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}

/// Shared scroll bindings: ↑↓ / jk by one, PgUp/PgDn by a page, Home/End
pub trait ScrollableInteractive: Interactive + Scrollable {
    fn handle_scroll_keys(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Home => self.scroll_to_top(),
            KeyCode::End => self.scroll_to_bottom(),
            _ => return Handled::No,
        }
        Handled::Yes
    }
}

impl<T: Interactive + Scrollable> ScrollableInteractive for T {}
