// Pager bar component
//
// Previous / next controls with the page counter between them. A control is
// drawn dimmed while its link is absent or a read is in flight.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the pagination controls
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let browser = &app.browser;

    let control = |enabled: bool| {
        if enabled {
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        }
    };

    let mut label = browser.page().label();
    if browser.is_loading() {
        label = format!("{} {}", app.spinner_char(), label);
    }
    let label_color = if browser.is_loading() {
        theme.loading
    } else {
        theme.title
    };

    let line = Line::from(vec![
        Span::styled("‹ prev [p]", control(browser.can_go_previous())),
        Span::raw("    "),
        Span::styled(label, Style::default().fg(label_color)),
        Span::raw("    "),
        Span::styled("[n] next ›", control(browser.can_go_next())),
    ])
    .centered();

    f.render_widget(Paragraph::new(line), area);
}
