//! Core component trait - the foundation of the UI system
//!
//! Every panel that can be rendered implements `Component`.

use crate::browser::Browser;
use crate::theme::Theme;
use crate::tui::scroll::FocusablePanel;
use ratatui::{layout::Rect, Frame};

/// Unique identifier for a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// Character card grid
    Grid,
    /// Detail overlay (modal)
    Detail,
    /// System logs panel
    Logs,
}

impl From<FocusablePanel> for ComponentId {
    fn from(panel: FocusablePanel) -> Self {
        match panel {
            FocusablePanel::Grid => ComponentId::Grid,
            FocusablePanel::Logs => ComponentId::Logs,
        }
    }
}

/// Immutable context passed to components during rendering
///
/// Components see the theme and the browser state, never the mutable App.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub theme: &'a Theme,

    /// Read-only view of the browser state container
    pub browser: &'a Browser,

    /// Which component currently has focus
    pub focus: ComponentId,

    /// Animation frame counter (for the loading spinner)
    pub animation_frame: usize,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        theme: &'a Theme,
        browser: &'a Browser,
        focus: ComponentId,
        animation_frame: usize,
    ) -> Self {
        Self {
            theme,
            browser,
            focus,
            animation_frame,
        }
    }

    /// Check if a component is currently focused
    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus == id
    }

    /// Get spinner character for current animation frame
    pub fn spinner_char(&self) -> char {
        spinner_char(self.animation_frame)
    }
}

/// Spinner glyph for an animation frame
pub fn spinner_char(frame: usize) -> char {
    const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
    SPINNER[frame % SPINNER.len()]
}

/// Base trait for all UI components
///
/// A component is anything that can render itself to the terminal.
/// Most components also implement `Scrollable`, `Copyable` or `Interactive`.
pub trait Component {
    /// Unique identifier for this component
    fn id(&self) -> ComponentId;

    /// Render the component to the given area
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}
