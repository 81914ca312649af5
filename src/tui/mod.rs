// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks, fetch results)
// - Layered key dispatch into the browser

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod scroll;
pub mod traits;
pub mod views;

use crate::browser::Command;
use crate::config::Config;
use crate::listing::ListingSource;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, InputMode};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use traits::{Handled, Interactive, Scrollable};

/// Capacity of the fetch result channel (at most one read is in flight)
const COMMAND_CHANNEL_SIZE: usize = 16;

/// Run the TUI
///
/// Sets up the terminal, issues the initial read, runs the event loop and
/// restores the terminal when done (also when the loop fails).
pub async fn run_tui(
    config: Config,
    source: Arc<dyn ListingSource>,
    log_buffer: LogBuffer,
) -> Result<()> {
    let (command_tx, mut command_rx) = mpsc::channel(COMMAND_CHANNEL_SIZE);
    let mut app = App::new(&config, source, command_tx, log_buffer);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if app.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
    } else {
        execute!(stdout, EnterAlternateScreen)
    }
    .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    tracing::info!("Browsing {} via {}", config.listing.api_url, app.source_name);
    app.dispatch(Command::Start);

    let result = run_event_loop(&mut terminal, &mut app, &mut command_rx).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources with `tokio::select!`:
/// 1. Keyboard and mouse input
/// 2. Timer ticks (spinner animation, toast expiry)
/// 3. Fetch results from the fetcher's tasks
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    command_rx: &mut mpsc::Receiver<Command>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            Some(command) = command_rx.recv() => {
                app.dispatch(command);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Filter input → Global → Focused component
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return;
    }
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl-C always quits, whatever has focus
    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        app.should_quit = true;
        return;
    }

    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: Filter input takes every key while editing
    if app.input_mode == InputMode::Filter {
        handle_filter_input(app, &key_event);
        return;
    }

    // Layer 3: Global keys
    if handle_global_keys(app, &key_event) {
        return;
    }

    let key = key_event.code;
    if !app.handle_key_press(key) {
        return;
    }

    // Layer 4: Focused component, with fallbacks for what it leaves alone
    match key {
        KeyCode::Enter if app.is_focused(scroll::FocusablePanel::Grid) => app.open_highlighted(),
        KeyCode::Esc => {
            if app.dispatch_to_focused(key_event) == Handled::No
                && !app.browser.query().is_empty()
            {
                app.dispatch(Command::ClearQuery);
            }
        }
        _ => {
            app.dispatch_to_focused(key_event);
        }
    }
}

/// Edit the filter query; the view updates on every keystroke
fn handle_filter_input(app: &mut App, key_event: &KeyEvent) {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        KeyCode::Char('u') if ctrl => app.dispatch(Command::ClearQuery),
        KeyCode::Char(c) if !ctrl => app.dispatch(Command::PushQueryChar(c)),
        KeyCode::Backspace => app.dispatch(Command::PopQueryChar),
        KeyCode::Enter | KeyCode::Esc => app.input_mode = InputMode::Normal,
        _ => {}
    }
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.modal.is_some() {
                return;
            }
            if let Some(idx) = app.card_grid.card_at(mouse_event.column, mouse_event.row) {
                app.input_mode = InputMode::Normal;
                app.open_card(idx);
            }
        }
        MouseEventKind::ScrollUp => {
            if app.modal == Some(Modal::Detail) {
                app.detail_panel.scroll_up();
            } else {
                app.dispatch_to_focused(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
            }
        }
        MouseEventKind::ScrollDown => {
            if app.modal == Some(Modal::Detail) {
                app.detail_panel.scroll_down();
            } else {
                app.dispatch_to_focused(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
            }
        }
        _ => {}
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(modal) = app.modal else {
        return false;
    };

    if modal == Modal::Detail && app.detail_panel.handle_key(*key_event) == Handled::Yes {
        return true;
    }

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => match modal {
            Modal::Detail => app.dispatch(Command::CloseDetail),
            Modal::Help => app.modal = None,
        },
        ModalAction::PreviousRecord => app.dispatch(Command::SelectPrevious),
        ModalAction::NextRecord => app.dispatch(Command::SelectNext),
        ModalAction::CopyReadable => app.copy(false),
        ModalAction::CopyJson => app.copy(true),
    }

    true
}

/// Commands and app-level keys; each fires once per physical press
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let key = key_event.code;
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    let command = match key {
        KeyCode::Char('[') | KeyCode::Char('p') | KeyCode::PageUp => {
            Some(Command::GoToPreviousPage)
        }
        KeyCode::Char(']') | KeyCode::Char('n') | KeyCode::PageDown => {
            Some(Command::GoToNextPage)
        }
        KeyCode::Char('r') => Some(Command::Reload),
        KeyCode::Char('u') if ctrl => Some(Command::ClearQuery),
        _ => None,
    };
    if let Some(command) = command {
        if app.handle_key_press(key) {
            app.dispatch(command);
        }
        return true;
    }

    let action: fn(&mut App) = match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => |app| app.should_quit = true,
        KeyCode::Char('?') => |app| app.modal = Some(Modal::Help),
        KeyCode::Char('/') => |app| {
            app.focused = scroll::FocusablePanel::Grid;
            app.input_mode = InputMode::Filter;
        },
        KeyCode::Char('L') => |app| app.toggle_logs(),
        KeyCode::Tab | KeyCode::BackTab => |app| app.focus_next(),
        KeyCode::Char('y') => |app| app.copy(false),
        KeyCode::Char('Y') => |app| app.copy(true),
        _ => return false,
    };
    if app.handle_key_press(key) {
        action(app);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::{DetailState, FetchStatus};
    use crate::listing::DemoListing;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// App over the zero-latency demo source, first page loaded
    async fn loaded_app() -> (App, mpsc::Receiver<Command>) {
        let config = Config {
            theme: "Terminal".to_string(),
            ..Config::default()
        };
        let (tx, mut rx) = mpsc::channel(COMMAND_CHANNEL_SIZE);
        let source: Arc<dyn ListingSource> = Arc::new(DemoListing::new(Duration::ZERO));
        let mut app = App::new(&config, source, tx, LogBuffer::new());

        app.dispatch(Command::Start);
        let loaded = rx.recv().await.unwrap();
        app.dispatch(loaded);
        assert_eq!(app.browser.status(), &FetchStatus::Loaded);
        (app, rx)
    }

    /// Separate presses: the debounce treats repeats of one key as holds
    fn release_all(app: &mut App, codes: &[KeyCode]) {
        for code in codes {
            app.handle_key_release(*code);
        }
    }

    #[tokio::test]
    async fn test_typing_filters_live() {
        let (mut app, _rx) = loaded_app().await;

        handle_key_event(&mut app, press(KeyCode::Char('/')));
        assert_eq!(app.input_mode, InputMode::Filter);

        for c in "smith".chars() {
            handle_key_event(&mut app, press(KeyCode::Char(c)));
        }
        assert_eq!(app.browser.query(), "smith");
        assert_eq!(app.browser.filtered_len(), 4);

        handle_key_event(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.browser.query(), "smit");

        handle_key_event(&mut app, press(KeyCode::Enter));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.browser.query(), "smit");

        // Esc in normal mode clears the query
        handle_key_event(&mut app, press(KeyCode::Esc));
        assert_eq!(app.browser.query(), "");
        assert_eq!(app.browser.filtered_len(), 6);
    }

    #[tokio::test]
    async fn test_ctrl_u_clears_query_while_editing() {
        let (mut app, _rx) = loaded_app().await;
        handle_key_event(&mut app, press(KeyCode::Char('/')));
        handle_key_event(&mut app, press(KeyCode::Char('x')));
        assert_eq!(app.browser.filtered_len(), 0);

        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
        );
        assert_eq!(app.browser.query(), "");
        assert_eq!(app.input_mode, InputMode::Filter);
    }

    #[tokio::test]
    async fn test_filter_mode_keys_are_not_commands() {
        let (mut app, _rx) = loaded_app().await;
        handle_key_event(&mut app, press(KeyCode::Char('/')));
        handle_key_event(&mut app, press(KeyCode::Char('q')));
        handle_key_event(&mut app, press(KeyCode::Char('n')));

        assert!(!app.should_quit);
        assert!(!app.browser.is_loading());
        assert_eq!(app.browser.query(), "qn");
    }

    #[tokio::test]
    async fn test_enter_opens_detail_and_esc_closes() {
        let (mut app, _rx) = loaded_app().await;

        handle_key_event(&mut app, press(KeyCode::Right));
        handle_key_event(&mut app, press(KeyCode::Enter));
        assert_eq!(app.modal, Some(Modal::Detail));
        assert_eq!(app.browser.detail().record().map(|r| r.id), Some(2));
        assert_eq!(app.detail_panel.shown_id(), Some(2));

        // Next record in the overlay moves the grid cursor along
        handle_key_event(&mut app, press(KeyCode::Right));
        assert_eq!(app.browser.detail().record().map(|r| r.id), Some(3));
        assert_eq!(app.detail_panel.shown_id(), Some(3));
        assert_eq!(app.card_grid.cursor(), Some(2));

        handle_key_event(&mut app, press(KeyCode::Esc));
        assert_eq!(app.modal, None);
        assert_eq!(app.browser.detail(), &DetailState::Hidden);
        assert_eq!(app.detail_panel.shown_id(), None);
    }

    #[tokio::test]
    async fn test_detail_overlay_scrolls_through_panel() {
        let (mut app, _rx) = loaded_app().await;
        handle_key_event(&mut app, press(KeyCode::Enter));
        app.detail_panel.update_dimensions(20, 5);

        handle_key_event(&mut app, press(KeyCode::Down));
        assert_eq!(app.detail_panel.scroll_state().offset(), 1);
        handle_key_event(&mut app, press(KeyCode::End));
        assert_eq!(app.detail_panel.scroll_state().offset(), 15);
        handle_key_event(&mut app, press(KeyCode::Char('k')));
        assert_eq!(app.detail_panel.scroll_state().offset(), 14);

        // Scrolling leaves the selection and the grid cursor alone
        assert_eq!(app.modal, Some(Modal::Detail));
        assert_eq!(app.browser.detail().record().map(|r| r.id), Some(1));
        assert_eq!(app.card_grid.cursor(), Some(0));
    }

    #[tokio::test]
    async fn test_modal_swallows_paging_and_quit() {
        let (mut app, _rx) = loaded_app().await;
        handle_key_event(&mut app, press(KeyCode::Enter));
        assert_eq!(app.modal, Some(Modal::Detail));

        handle_key_event(&mut app, press(KeyCode::Char(']')));
        assert!(!app.browser.is_loading());

        // q closes the overlay, it does not quit
        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.modal, None);
    }

    #[tokio::test]
    async fn test_next_page_key_fetches_and_resets_cursor() {
        let (mut app, mut rx) = loaded_app().await;
        handle_key_event(&mut app, press(KeyCode::End));
        assert_eq!(app.card_grid.cursor(), Some(5));

        handle_key_event(&mut app, press(KeyCode::Char(']')));
        assert!(app.browser.is_loading());
        assert_eq!(app.browser.page().page_number, 2);

        // Paging is refused while the read is in flight
        release_all(&mut app, &[KeyCode::Char(']')]);
        handle_key_event(&mut app, press(KeyCode::Char(']')));
        assert_eq!(app.browser.page().page_number, 2);

        let loaded = rx.recv().await.unwrap();
        app.dispatch(loaded);
        assert_eq!(app.browser.status(), &FetchStatus::Loaded);
        assert_eq!(app.browser.page().records[0].name, "Adjudicator Rick");
        assert_eq!(app.card_grid.cursor(), Some(0));

        handle_key_event(&mut app, press(KeyCode::Char('p')));
        let loaded = rx.recv().await.unwrap();
        app.dispatch(loaded);
        assert_eq!(app.browser.page().page_number, 1);
        assert!(!app.browser.can_go_previous());
    }

    #[tokio::test]
    async fn test_help_modal_and_quit() {
        let (mut app, _rx) = loaded_app().await;

        handle_key_event(&mut app, press(KeyCode::Char('?')));
        assert_eq!(app.modal, Some(Modal::Help));
        handle_key_event(&mut app, press(KeyCode::Esc));
        assert_eq!(app.modal, None);

        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_logs_toggle_and_focus_cycle() {
        let (mut app, _rx) = loaded_app().await;

        handle_key_event(&mut app, press(KeyCode::Tab));
        assert!(app.is_focused(scroll::FocusablePanel::Grid));

        handle_key_event(&mut app, press(KeyCode::Char('L')));
        assert!(app.show_logs);
        release_all(&mut app, &[KeyCode::Tab]);
        handle_key_event(&mut app, press(KeyCode::Tab));
        assert!(app.is_focused(scroll::FocusablePanel::Logs));

        release_all(&mut app, &[KeyCode::Char('L')]);
        handle_key_event(&mut app, press(KeyCode::Char('L')));
        assert!(!app.show_logs);
        assert!(app.is_focused(scroll::FocusablePanel::Grid));
    }

    #[tokio::test]
    async fn test_release_events_only_update_key_state() {
        let (mut app, _rx) = loaded_app().await;
        let mut release = press(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;

        handle_key_event(&mut app, release);
        assert!(!app.should_quit);
    }
}
