//! Logs panel component
//!
//! Displays the in-memory tracing buffer below the grid (toggled with `L`).
//! Implements Component, Scrollable, Selectable, Copyable and Interactive.
//!
//! The panel does not own the `LogBuffer` (the tracing layer writes into it);
//! it takes a snapshot on every `sync` and renders from that.

use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::logging::{LogEntry, LogLevel};
use crate::theme::Theme;
use crate::tui::scroll::{FocusablePanel, ScrollState};
use crate::tui::traits::{
    Component, ComponentId, Copyable, Handled, Interactive, RenderContext, Scrollable, Selectable,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub struct LogsPanel {
    /// Tail-anchored so new entries stay in view
    scroll: ScrollState,

    /// Selected log entry index (None = auto-follow mode)
    selected: Option<usize>,

    /// Snapshot of the log buffer taken at the last sync
    entries: Vec<LogEntry>,
}

impl LogsPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::new(),
            selected: None,
            entries: Vec::new(),
        }
    }

    /// Take the current entries and viewport height (call each frame)
    pub fn sync_entries(&mut self, entries: Vec<LogEntry>, viewport_height: usize) {
        self.scroll.update_dimensions(entries.len(), viewport_height);

        if let Some(idx) = self.selected {
            if idx >= entries.len() {
                self.selected = entries.len().checked_sub(1);
            }
        }
        self.entries = entries;
    }
}

impl Default for LogsPanel {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Component for LogsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Logs
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let focused = ctx.is_focused(self.id());
        let theme = ctx.theme;
        let (start, end) = self.scroll.visible_range();

        let items: Vec<ListItem> = self.entries[start..end]
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if focused && self.selected == Some(start + i) {
                    Style::default()
                        .fg(theme.selection_fg)
                        .bg(theme.selection)
                        .add_modifier(Modifier::BOLD)
                } else {
                    log_level_style(entry.level, theme)
                };
                ListItem::new(format_log_entry(entry)).style(style)
            })
            .collect();

        let title = if self.selected.is_some() && focused {
            " System Logs [select] "
        } else if self.scroll.is_pinned() {
            " System Logs "
        } else {
            " System Logs [scroll] "
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(
                    Style::default().fg(theme.panel_border(FocusablePanel::Logs, focused)),
                )
                .title(title),
        );

        f.render_widget(list, area);
        render_scrollbar(
            f,
            area,
            &self.scroll,
            ScrollbarStyle::Minimal,
            theme.panel_border(FocusablePanel::Logs, focused),
        );
    }
}

impl Scrollable for LogsPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Selectable for LogsPanel {
    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn select(&mut self, index: usize) {
        let idx = index.min(self.entries.len().saturating_sub(1));
        self.selected = Some(idx);
        self.scroll.ensure_visible(idx);
    }

    fn item_count(&self) -> usize {
        self.entries.len()
    }

    /// First selection starts at the most recent entry
    fn select_next(&mut self) {
        match self.selected {
            Some(idx) if idx + 1 < self.entries.len() => self.select(idx + 1),
            None if !self.entries.is_empty() => self.select_last(),
            _ => {}
        }
    }

    /// First selection starts at the most recent entry
    fn select_previous(&mut self) {
        match self.selected {
            Some(idx) if idx > 0 => self.select(idx - 1),
            None if !self.entries.is_empty() => self.select_last(),
            _ => {}
        }
    }
}

impl Copyable for LogsPanel {
    fn copy_text(&self) -> Option<String> {
        self.selected
            .and_then(|idx| self.entries.get(idx))
            .map(|entry| format!("{} {}", entry.target, format_log_entry(entry)))
    }

    fn copy_description(&self) -> String {
        "log entry".to_string()
    }
}

impl Interactive for LogsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Home => {
                self.scroll_to_top();
                self.select_first();
            }
            KeyCode::End => {
                self.scroll_to_bottom();
                self.select_last();
            }
            KeyCode::Esc => {
                // Nothing selected: let App handle Esc
                if self.selected.take().is_none() {
                    return Handled::No;
                }
                self.scroll.scroll_to_bottom();
            }
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:select  y:copy  Esc:clear  Tab:grid")
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Helper Functions
// ═══════════════════════════════════════════════════════════════════════════

fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

fn log_level_style(level: LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.loading),
        LogLevel::Info => Style::default().fg(theme.foreground),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.muted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crossterm::event::KeyModifiers;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: Utc::now(),
            level: LogLevel::Info,
            target: "cardex::browser".to_string(),
            message: message.to_string(),
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_first_selection_is_most_recent() {
        let mut panel = LogsPanel::new();
        panel.sync_entries(vec![entry("one"), entry("two"), entry("three")], 2);

        panel.handle_key(key(KeyCode::Up));
        assert_eq!(panel.selected_index(), Some(2));
        let copied = panel.copy_text().unwrap();
        assert!(copied.starts_with("cardex::browser ["));
        assert!(copied.ends_with("three"));

        panel.handle_key(key(KeyCode::Up));
        assert_eq!(panel.selected_index(), Some(1));
    }

    #[test]
    fn test_esc_clears_selection_then_bubbles() {
        let mut panel = LogsPanel::new();
        panel.sync_entries(vec![entry("one")], 5);

        panel.handle_key(key(KeyCode::Down));
        assert_eq!(panel.handle_key(key(KeyCode::Esc)), Handled::Yes);
        assert_eq!(panel.selected_index(), None);
        assert_eq!(panel.handle_key(key(KeyCode::Esc)), Handled::No);
    }

    #[test]
    fn test_selection_clamped_when_buffer_shrinks() {
        let mut panel = LogsPanel::new();
        panel.sync_entries(vec![entry("a"), entry("b"), entry("c")], 5);
        panel.handle_key(key(KeyCode::End));
        assert_eq!(panel.selected_index(), Some(2));

        panel.sync_entries(vec![entry("a")], 5);
        assert_eq!(panel.selected_index(), Some(0));
        assert_eq!(panel.copy_text().map(|t| t.ends_with('a')), Some(true));
    }
}
