// Search bar component
//
// The name filter input. Typing applies the filter live; the bar shows how
// many records of the page match.

use crate::tui::app::{App, InputMode};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the filter input
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let editing = app.input_mode == InputMode::Filter;
    let query = app.browser.query();

    let content = if query.is_empty() && !editing {
        Line::from(Span::styled(
            " press / to filter by name",
            Style::default().fg(theme.muted),
        ))
    } else {
        let mut spans = vec![
            Span::styled(" / ", Style::default().fg(theme.highlight)),
            Span::styled(
                query.to_string(),
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if editing {
            // Block cursor; blinks with the animation tick
            let cursor = if app.animation_frame % 4 < 2 { "▏" } else { " " };
            spans.push(Span::styled(cursor, Style::default().fg(theme.highlight)));
        }
        Line::from(spans)
    };

    let total = app.browser.page().records.len();
    let counter = if query.is_empty() {
        String::new()
    } else {
        format!(" {} of {} ", app.browser.filtered_len(), total)
    };

    let border = if editing { theme.highlight } else { theme.border };

    let bar = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border))
            .title(" Filter ")
            .title_top(Line::from(counter).right_aligned()),
    );

    f.render_widget(bar, area);
}
