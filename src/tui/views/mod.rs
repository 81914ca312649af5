// Views module - screen-level rendering logic
//
// The browser has a single screen: title, filter input, card grid, an
// optional logs panel, the pager and the status bar. Modals and toasts are
// drawn on top.

mod modal;

use super::app::App;
use super::components::{pager_bar, search_bar, status_bar, title_bar};
use super::traits::Component;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Height of the docked logs panel, borders included
const LOGS_HEIGHT: u16 = 8;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Apply theme background to entire frame (respects use_theme_background toggle)
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let mut constraints = vec![
        Constraint::Length(3), // title
        Constraint::Length(3), // filter
        Constraint::Min(8),    // grid
    ];
    if app.show_logs {
        constraints.push(Constraint::Length(LOGS_HEIGHT));
    }
    constraints.push(Constraint::Length(1)); // pager
    constraints.push(Constraint::Length(2)); // status

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    title_bar::render(f, chunks[0], app);
    search_bar::render(f, chunks[1], app);

    // Layout pass first: the grid needs the area to pick columns and
    // record card rects for mouse hit-testing
    let grid_area = chunks[2];
    app.card_grid.sync(grid_area, app.browser.filtered_len());

    let mut next = 3;
    if app.show_logs {
        let viewport = chunks[next].height.saturating_sub(2) as usize;
        app.logs_panel
            .sync_entries(app.log_buffer.get_all(), viewport);
    }

    {
        let ctx = app.render_context();
        app.card_grid.render(f, grid_area, &ctx);
        if app.show_logs {
            app.logs_panel.render(f, chunks[next], &ctx);
        }
    }
    if app.show_logs {
        next += 1;
    }

    pager_bar::render(f, chunks[next], app);
    status_bar::render(f, chunks[next + 1], app);

    if let Some(active) = app.modal {
        modal::render(f, active, app);
    }

    if let Some(toast) = &app.toast {
        let area = f.area();
        toast.render(f, area, &app.theme);
    }
    app.clear_expired_toast();
}
