// Status bar component
//
// Fetch state on the left, key hints for the focused component on the right.

use crate::browser::FetchStatus;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Narrow terminals drop the key hints.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let browser = &app.browser;
    let bp = Breakpoint::from_width(area.width);

    let (state, color) = match browser.status() {
        FetchStatus::Loading => (
            format!(
                " {} Loading page {} from {}…",
                app.spinner_char(),
                browser.page().page_number,
                app.source_name
            ),
            theme.loading,
        ),
        FetchStatus::Loaded => {
            let total = match browser.page().total_count {
                Some(count) => format!(" of {}", super::format_number(count)),
                None => String::new(),
            };
            (
                format!(
                    " ● {} characters{} · {}",
                    browser.page().records.len(),
                    total,
                    app.source_name
                ),
                theme.status_bar,
            )
        }
        FetchStatus::FetchFailed(err) => (
            format!(" ✗ {} ({}) · r to retry", err, err.kind()),
            theme.error,
        ),
    };

    let mut spans = vec![Span::styled(state, Style::default().fg(color))];
    if bp.at_least(Breakpoint::Normal) {
        if let Some(hint) = app.focus_hint() {
            spans.push(Span::styled(" │ ", Style::default().fg(theme.border)));
            spans.push(Span::styled(hint, Style::default().fg(theme.muted)));
        }
    }

    let status = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border)),
    );

    f.render_widget(status, area);
}
