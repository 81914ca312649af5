// Title bar component
//
// App name, the listing source when it is not the real service, a loading
// indicator and the help hint.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let mut spans = vec![
        Span::styled(
            " 🛸 cardex",
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Rick and Morty characters", Style::default().fg(theme.muted)),
    ];
    if app.source_name != "http" {
        spans.push(Span::styled(
            format!("  [{}]", app.source_name),
            Style::default().fg(theme.highlight),
        ));
    }
    if app.browser.is_loading() {
        spans.push(Span::styled(
            format!("  {} loading", app.spinner_char()),
            Style::default().fg(theme.loading),
        ));
    }

    let title = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.title))
            .title_top(Line::from(" ?:help ").right_aligned()),
    );

    f.render_widget(title, area);
}
