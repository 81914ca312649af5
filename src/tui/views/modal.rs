// Modal overlay rendering
//
// Modals are rendered on top of the main content:
// - Help modal: keyboard shortcuts and current theme
// - Detail modal: every field of the selected character

use crate::tui::app::App;
use crate::tui::modal::Modal;
use crate::tui::traits::{Component, Scrollable};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Widest the detail overlay gets; the fields read badly when stretched
const DETAIL_MAX_WIDTH: u16 = 76;

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: Modal, app: &mut App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::Detail => render_detail(f, app),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn percent(value: u16, pct: u32) -> u16 {
    (u32::from(value) * pct / 100) as u16
}

/// Help sections: heading, then (keys, action) rows
const HELP: &[(&str, &[(&str, &str)])] = &[
    (
        "Browse",
        &[
            ("←↑↓→ hjkl", "Move between cards"),
            ("Home/End", "First / last card"),
            ("Enter, click", "Open character"),
        ],
    ),
    (
        "Pages",
        &[
            ("] n PgDn", "Next page"),
            ("[ p PgUp", "Previous page"),
            ("r", "Reload / retry"),
        ],
    ),
    (
        "Filter",
        &[
            ("/", "Filter by name"),
            ("Enter/Esc", "Stop editing"),
            ("Ctrl-U", "Clear filter"),
        ],
    ),
    (
        "Character",
        &[
            ("← →", "Previous / next"),
            ("↑ ↓", "Scroll"),
            ("Esc", "Close"),
        ],
    ),
    (
        "General",
        &[
            ("y / Y", "Copy text / JSON"),
            ("L", "Toggle logs"),
            ("Tab", "Cycle focus"),
            ("?", "Toggle this help"),
            ("q", "Quit"),
        ],
    ),
];

fn render_help(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let key_style = Style::default().fg(theme.highlight);
    let desc_style = Style::default().fg(theme.foreground);
    let heading_style = Style::default()
        .fg(theme.title)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for (heading, rows) in HELP {
        lines.push(Line::raw(""));
        lines.push(Line::styled(format!("  {}", heading), heading_style));
        lines.extend(rows.iter().map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!("    {:<14}", keys), key_style),
                Span::styled(*action, desc_style),
            ])
        }));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  theme ", Style::default().fg(theme.muted)),
        Span::styled(theme.name.as_str(), key_style),
        Span::styled("  source ", Style::default().fg(theme.muted)),
        Span::styled(app.source_name, key_style),
    ]));

    let height = lines.len() as u16 + 2;
    let area = centered_rect(46, height, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(Text::from(lines))
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.highlight))
                .border_type(theme.border_type)
                .title(" Keys ")
                .title_bottom(Line::from(" ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

/// Render the character detail overlay
fn render_detail(f: &mut Frame, app: &mut App) {
    let Some(field_count) = app.browser.detail_fields().map(|fields| fields.len()) else {
        return;
    };

    let frame_area = f.area();
    let width = percent(frame_area.width, 90).clamp(40, DETAIL_MAX_WIDTH);
    // Header (3 lines) plus one line per field, plus borders
    let wanted = field_count as u16 + 3 + 2;
    let height = wanted.min(percent(frame_area.height, 90).max(10));
    let area = centered_rect(width, height, frame_area);

    let viewport_height = area.height.saturating_sub(2) as usize;
    app.detail_panel
        .update_dimensions(field_count + 3, viewport_height);

    let ctx = app.render_context();
    app.detail_panel.render(f, area, &ctx);
}
