//! Detail overlay component
//!
//! Shows every field of the selected character. The record itself lives in
//! the browser's selection; the panel only keeps scroll position and the
//! clipboard renderings of whatever it was last opened on.

use super::formatters::monogram;
use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::browser::{detail::format_detail_text, DetailField, LocationSource};
use crate::listing::CharacterRecord;
use crate::theme::Theme;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{
    Component, ComponentId, Copyable, Handled, Interactive, RenderContext, Scrollable,
    ScrollableInteractive,
};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Width of the label column
const LABEL_WIDTH: usize = 14;

pub struct DetailPanel {
    /// Vertical scroll (manual: the overlay opens at the top)
    scroll: ScrollState,

    /// Id of the record the cached content belongs to
    shown_id: Option<u64>,

    /// Readable text for `y`
    cached_text: Option<String>,

    /// Pretty JSON for `Y`
    cached_json: Option<String>,
}

impl DetailPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::manual(),
            shown_id: None,
            cached_text: None,
            cached_json: None,
        }
    }

    /// Point the panel at a record (called whenever the selection changes)
    pub fn open(&mut self, record: &CharacterRecord, source: LocationSource) {
        self.scroll.scroll_to_top();
        self.shown_id = Some(record.id);
        self.cached_text = Some(format_detail_text(record, source));
        self.cached_json = match serde_json::to_string_pretty(record) {
            Ok(json) => Some(json),
            Err(e) => {
                tracing::warn!("Could not serialize character {}: {}", record.id, e);
                None
            }
        };
    }

    /// Forget the record (overlay dismissed)
    pub fn reset(&mut self) {
        self.scroll.scroll_to_top();
        self.shown_id = None;
        self.cached_text = None;
        self.cached_json = None;
    }

    /// Record the cached content belongs to
    pub fn shown_id(&self) -> Option<u64> {
        self.shown_id
    }
}

impl Default for DetailPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Styled overlay lines: a header, then one line per field
pub fn detail_lines(
    record: &CharacterRecord,
    fields: &[DetailField],
    theme: &Theme,
) -> Vec<Line<'static>> {
    let status_color = theme.status_color(&record.status);
    let label_style = Style::default().fg(theme.muted);
    let value_style = Style::default().fg(theme.foreground);

    let mut lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!(" {:^3} ", monogram(&record.name)),
                Style::default()
                    .fg(theme.selection_fg)
                    .bg(theme.selection)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                record.name.clone(),
                Style::default()
                    .fg(theme.title)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(format!("● {}", record.status), Style::default().fg(status_color)),
        ]),
        Line::raw(""),
    ];

    for field in fields {
        let style = if field.label == "Status" {
            Style::default().fg(status_color)
        } else {
            value_style
        };
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{:<width$}", field.label, width = LABEL_WIDTH), label_style),
            Span::styled(field.value.clone(), style),
        ]));
    }

    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Component for DetailPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Detail
    }

    /// Render into the overlay rect (callers size it and sync dimensions first)
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let browser = ctx.browser;
        let (Some(record), Some(fields)) = (browser.detail().record(), browser.detail_fields())
        else {
            return;
        };

        let position = match browser.selected_position() {
            Some(pos) => format!(" ({}/{})", pos + 1, browser.filtered_len()),
            None => String::new(),
        };

        f.render_widget(Clear, area);

        let paragraph = Paragraph::new(detail_lines(record, &fields, ctx.theme))
            .style(
                Style::default()
                    .fg(ctx.theme.foreground)
                    .bg(ctx.theme.background),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(ctx.theme.border_type)
                    .border_style(Style::default().fg(ctx.theme.panel_detail))
                    .title(format!(" Character #{}{} ", record.id, position))
                    .title_bottom(
                        Line::from(" ↑↓:scroll  ←→:prev/next  y:copy  Y:json  Esc:close ")
                            .centered(),
                    ),
            )
            .scroll((self.scroll.offset() as u16, 0));

        f.render_widget(paragraph, area);
        render_scrollbar(
            f,
            area,
            &self.scroll,
            ScrollbarStyle::Arrows,
            ctx.theme.panel_detail,
        );
    }
}

impl Scrollable for DetailPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Copyable for DetailPanel {
    fn copy_text(&self) -> Option<String> {
        self.cached_text.clone()
    }

    fn copy_data(&self) -> Option<String> {
        self.cached_json.clone()
    }

    fn copy_description(&self) -> String {
        "character details".to_string()
    }
}

impl Interactive for DetailPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        self.handle_scroll_keys(key)
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:scroll  ←→:prev/next  y/Y:copy  Esc:close")
    }
}
