//! Character card grid
//!
//! One card per record of the filtered view, in page order. The grid owns a
//! cursor (the highlighted card) and a row-based scroll state; the records
//! themselves are read from the browser at render time.
//!
//! Layout is recomputed by `sync` before every frame so mouse clicks can be
//! mapped back to the card under the pointer.

use super::formatters::{avatar_file, monogram, truncate_to_width};
use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::browser::FetchStatus;
use crate::listing::CharacterRecord;
use crate::theme::Theme;
use crate::tui::layout::Breakpoint;
use crate::tui::scroll::{FocusablePanel, ScrollState};
use crate::tui::traits::{
    Component, ComponentId, Handled, Interactive, RenderContext, Scrollable, Selectable,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Card height including borders
pub const CARD_HEIGHT: u16 = 5;

pub struct CardGrid {
    /// Scroll position in rows
    scroll: ScrollState,
    /// Highlighted card (index into the filtered view)
    cursor: usize,
    /// Filtered view length at last sync
    count: usize,
    columns: usize,
    /// Screen rect of each visible card, by filtered index
    card_areas: Vec<(usize, Rect)>,
}

impl CardGrid {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::manual(),
            cursor: 0,
            count: 0,
            columns: 1,
            card_areas: Vec::new(),
        }
    }

    /// Cursor back to the first card (new page or new query)
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.scroll.scroll_to_top();
    }

    /// Highlighted card, if the view has any
    pub fn cursor(&self) -> Option<usize> {
        (self.count > 0).then_some(self.cursor)
    }

    /// Record the filtered view length, clamping the cursor
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        self.cursor = self.cursor.min(count.saturating_sub(1));
    }

    /// Recompute layout for the grid area (outer, including the border)
    pub fn sync(&mut self, area: Rect, count: usize) {
        self.set_count(count);

        let inner = inner_area(area);
        self.columns = Breakpoint::from_width(area.width).grid_columns();
        let rows_total = self.count.div_ceil(self.columns);
        let rows_visible = ((inner.height / CARD_HEIGHT) as usize).max(1);

        self.scroll.update_dimensions(rows_total, rows_visible);
        self.scroll.ensure_visible(self.cursor / self.columns);

        self.card_areas = layout_cards(
            inner,
            self.columns,
            self.scroll.offset(),
            rows_visible,
            self.count,
        );
    }

    /// Card under a screen position (mouse click)
    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        self.card_areas
            .iter()
            .find(|(_, rect)| {
                column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
            })
            .map(|(idx, _)| *idx)
    }

    fn move_up(&mut self) {
        if self.cursor >= self.columns {
            self.select(self.cursor - self.columns);
        }
    }

    fn move_down(&mut self) {
        let target = self.cursor + self.columns;
        if target < self.count {
            self.select(target);
        } else if self.cursor / self.columns < self.count.saturating_sub(1) / self.columns {
            // Partial last row: land on its last card
            self.select_last();
        }
    }

    fn render_placeholder(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let browser = ctx.browser;
        let (text, color) = match browser.status() {
            FetchStatus::Loading if browser.page().records.is_empty() => (
                format!("{} Loading characters…", ctx.spinner_char()),
                ctx.theme.loading,
            ),
            FetchStatus::FetchFailed(err) if browser.page().records.is_empty() => (
                format!("Could not load characters: {}\n\npress r to retry", err),
                ctx.theme.error,
            ),
            _ if !browser.query().is_empty() => (
                format!("No characters match \"{}\"", browser.query()),
                ctx.theme.muted,
            ),
            _ => ("This page has no characters".to_string(), ctx.theme.muted),
        };

        let top = area.y + area.height / 2;
        let message_area = Rect::new(area.x, top.saturating_sub(1), area.width, area.height.min(3));
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(color));
        f.render_widget(paragraph, message_area);
    }
}

impl Default for CardGrid {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Component for CardGrid {
    fn id(&self) -> ComponentId {
        ComponentId::Grid
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let focused = ctx.is_focused(self.id());
        let browser = ctx.browser;

        let title = match browser.page().records.len() {
            0 => " Characters ".to_string(),
            total if browser.query().is_empty() => format!(" Characters ({}) ", total),
            total => format!(" Characters ({} of {}) ", browser.filtered_len(), total),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(ctx.theme.border_type)
            .border_style(
                Style::default().fg(ctx.theme.panel_border(FocusablePanel::Grid, focused)),
            )
            .title(title);
        f.render_widget(block, area);

        if self.count == 0 {
            self.render_placeholder(f, inner_area(area), ctx);
            return;
        }

        for (idx, rect) in &self.card_areas {
            if let Some(record) = browser.filtered_record(*idx) {
                let highlighted = *idx == self.cursor;
                render_card(f, *rect, record, ctx.theme, highlighted, focused);
            }
        }

        render_scrollbar(
            f,
            area,
            &self.scroll,
            ScrollbarStyle::Minimal,
            ctx.theme.panel_border(FocusablePanel::Grid, focused),
        );
    }
}

impl Scrollable for CardGrid {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Selectable for CardGrid {
    fn selected_index(&self) -> Option<usize> {
        self.cursor()
    }

    fn select(&mut self, index: usize) {
        self.cursor = index.min(self.count.saturating_sub(1));
        self.scroll.ensure_visible(self.cursor / self.columns.max(1));
    }

    fn item_count(&self) -> usize {
        self.count
    }
}

impl Interactive for CardGrid {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        let before = self.cursor;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.select_previous(),
            KeyCode::Right | KeyCode::Char('l') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Home => self.select_first(),
            KeyCode::End => self.select_last(),
            _ => return Handled::No,
        }
        tracing::trace!("Grid cursor {} -> {}", before, self.cursor);
        Handled::from(true)
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("←↑↓→:move  Enter:open  /:filter  [ ]:page  r:reload  ?:help")
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Helper Functions
// ═══════════════════════════════════════════════════════════════════════════

fn inner_area(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

/// Rects for the cards of rows `first_row..first_row + rows`
fn layout_cards(
    inner: Rect,
    columns: usize,
    first_row: usize,
    rows: usize,
    count: usize,
) -> Vec<(usize, Rect)> {
    let columns = columns.max(1);
    // Leave a column for the scrollbar
    let usable = inner.width.saturating_sub(1);
    let card_width = usable / columns as u16;
    if card_width == 0 {
        return Vec::new();
    }

    let mut areas = Vec::new();
    for row in 0..rows {
        let y = inner.y + row as u16 * CARD_HEIGHT;
        if y + CARD_HEIGHT > inner.bottom() {
            break;
        }
        for col in 0..columns {
            let idx = (first_row + row) * columns + col;
            if idx >= count {
                return areas;
            }
            let x = inner.x + col as u16 * card_width;
            areas.push((idx, Rect::new(x, y, card_width, CARD_HEIGHT)));
        }
    }
    areas
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    record: &CharacterRecord,
    theme: &Theme,
    highlighted: bool,
    focused: bool,
) {
    let border_color = if highlighted && focused {
        theme.highlight
    } else {
        theme.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border_color))
        .title(format!(" #{} ", record.id));

    let text_width = (area.width as usize).saturating_sub(2 + 7);
    let tile = format!(" {:^3} ", monogram(&record.name));
    let tile_style = Style::default()
        .fg(theme.selection_fg)
        .bg(theme.selection)
        .add_modifier(Modifier::BOLD);
    let mut name_style = Style::default()
        .fg(theme.foreground)
        .add_modifier(Modifier::BOLD);
    if highlighted {
        name_style = name_style.add_modifier(Modifier::UNDERLINED);
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(tile, tile_style),
            Span::raw("  "),
            Span::styled(truncate_to_width(&record.name, text_width), name_style),
        ]),
        Line::from(vec![
            Span::raw("       "),
            Span::styled("● ", Style::default().fg(theme.status_color(&record.status))),
            Span::styled(
                truncate_to_width(
                    &format!("{} · {}", record.status, record.species),
                    text_width.saturating_sub(2),
                ),
                Style::default().fg(theme.foreground),
            ),
        ]),
        Line::from(vec![
            Span::raw("       "),
            Span::styled(
                truncate_to_width(avatar_file(&record.image), text_width),
                Style::default().fg(theme.muted),
            ),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// 100 columns → 3 card columns; 22 rows → 4 visible card rows
    fn grid_with(count: usize) -> CardGrid {
        let mut grid = CardGrid::new();
        grid.sync(Rect::new(0, 0, 100, 22), count);
        grid
    }

    #[test]
    fn test_cursor_moves_by_rows_and_columns() {
        let mut grid = grid_with(8);
        assert_eq!(grid.cursor(), Some(0));

        grid.handle_key(key(KeyCode::Right));
        assert_eq!(grid.cursor(), Some(1));

        grid.handle_key(key(KeyCode::Down));
        assert_eq!(grid.cursor(), Some(4));

        // Row 2 has cards 6 and 7 only: Down from 5 lands on the last card
        grid.handle_key(key(KeyCode::Right));
        grid.handle_key(key(KeyCode::Down));
        assert_eq!(grid.cursor(), Some(7));

        grid.handle_key(key(KeyCode::Char('k')));
        assert_eq!(grid.cursor(), Some(4));

        grid.handle_key(key(KeyCode::End));
        assert_eq!(grid.cursor(), Some(7));
        grid.handle_key(key(KeyCode::Home));
        assert_eq!(grid.cursor(), Some(0));
    }

    #[test]
    fn test_cursor_stays_at_edges() {
        let mut grid = grid_with(3);
        grid.handle_key(key(KeyCode::Left));
        grid.handle_key(key(KeyCode::Up));
        assert_eq!(grid.cursor(), Some(0));

        grid.handle_key(key(KeyCode::End));
        grid.handle_key(key(KeyCode::Right));
        grid.handle_key(key(KeyCode::Down));
        assert_eq!(grid.cursor(), Some(2));
    }

    #[test]
    fn test_cursor_clamped_when_view_shrinks() {
        let mut grid = grid_with(20);
        grid.select(17);
        assert_eq!(grid.cursor(), Some(17));

        grid.sync(Rect::new(0, 0, 100, 22), 2);
        assert_eq!(grid.cursor(), Some(1));

        grid.sync(Rect::new(0, 0, 100, 22), 0);
        assert_eq!(grid.cursor(), None);
    }

    #[test]
    fn test_unhandled_keys_bubble_up() {
        let mut grid = grid_with(4);
        assert_eq!(grid.handle_key(key(KeyCode::Char('r'))), Handled::No);
        assert_eq!(grid.handle_key(key(KeyCode::Enter)), Handled::No);
    }

    #[test]
    fn test_layout_and_hit_testing() {
        let grid = grid_with(5);
        // Inner area starts at (1,1); 98 usable columns → 3 cards of 32
        assert_eq!(grid.card_areas.len(), 5);
        assert_eq!(grid.card_areas[0].1, Rect::new(1, 1, 32, CARD_HEIGHT));
        assert_eq!(grid.card_areas[4].1, Rect::new(33, 6, 32, CARD_HEIGHT));

        assert_eq!(grid.card_at(2, 2), Some(0));
        assert_eq!(grid.card_at(40, 7), Some(4));
        assert_eq!(grid.card_at(80, 7), None);
        assert_eq!(grid.card_at(0, 0), None);
    }

    #[test]
    fn test_scrolls_to_keep_cursor_visible() {
        // 15 cards → 5 rows, 4 visible
        let mut grid = grid_with(15);
        grid.select(14);
        assert_eq!(grid.scroll_state().offset(), 1);

        grid.sync(Rect::new(0, 0, 100, 22), 15);
        assert_eq!(grid.card_areas.first().map(|(idx, _)| *idx), Some(3));
        assert_eq!(grid.card_at(2, 2), Some(3));
    }

    #[test]
    fn test_narrow_terminal_uses_one_column() {
        let mut grid = CardGrid::new();
        grid.sync(Rect::new(0, 0, 40, 22), 3);
        grid.handle_key(key(KeyCode::Down));
        assert_eq!(grid.cursor(), Some(1));
    }
}
