// TUI application state
//
// App is the orchestrator: it owns the browser state container and the
// fetcher that runs its effects, plus the per-panel UI state (grid cursor,
// overlay scroll, logs selection). Every browser change goes through
// `dispatch`, which keeps the detail modal in step with the selection.

use super::clipboard;
use super::components::{CardGrid, DetailPanel, LogsPanel, Toast};
use super::input::InputHandler;
use super::modal::Modal;
use super::scroll::FocusablePanel;
use super::traits::{spinner_char, Copyable, Handled, Interactive, RenderContext, Selectable};
use crate::browser::{detail::format_detail_text, Browser, Command, Fetcher};
use crate::config::Config;
use crate::listing::ListingSource;
use crate::logging::LogBuffer;
use crate::theme::{Theme, ThemeConfig};
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Where typed characters go
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are commands
    #[default]
    Normal,
    /// Keys edit the filter query
    Filter,
}

pub struct App {
    pub browser: Browser,
    fetcher: Fetcher,
    /// Listing source name for the status bar ("http", "demo")
    pub source_name: &'static str,

    pub input_mode: InputMode,
    pub focused: FocusablePanel,
    /// Logs panel visible (`L`)
    pub show_logs: bool,
    logs_enabled: bool,
    pub mouse_enabled: bool,

    // Components
    pub card_grid: CardGrid,
    pub detail_panel: DetailPanel,
    pub logs_panel: LogsPanel,

    pub modal: Option<Modal>,
    pub toast: Option<Toast>,
    pub theme: Theme,
    pub log_buffer: LogBuffer,
    input_handler: InputHandler,
    /// Advanced on every tick; drives spinners and the input cursor
    pub animation_frame: usize,
    pub should_quit: bool,
}

impl App {
    /// Build the app; fetch results are sent to `command_tx`
    pub fn new(
        config: &Config,
        source: Arc<dyn ListingSource>,
        command_tx: mpsc::Sender<Command>,
        log_buffer: LogBuffer,
    ) -> Self {
        let theme_config = ThemeConfig {
            use_theme_background: config.use_theme_background,
        };
        let fetcher = Fetcher::new(source, command_tx);

        Self {
            browser: Browser::new(
                config.listing.api_url.clone(),
                config.detail.location_source,
            ),
            source_name: fetcher.source_name(),
            fetcher,
            input_mode: InputMode::Normal,
            focused: FocusablePanel::Grid,
            show_logs: false,
            logs_enabled: config.features.logs_panel,
            mouse_enabled: config.features.mouse,
            card_grid: CardGrid::new(),
            detail_panel: DetailPanel::new(),
            logs_panel: LogsPanel::new(),
            modal: None,
            toast: None,
            theme: Theme::by_name_with_config(&config.theme, &theme_config),
            log_buffer,
            input_handler: InputHandler::with_default_config(),
            animation_frame: 0,
            should_quit: false,
        }
    }

    /// Apply a command to the browser and run the effect it asks for
    pub fn dispatch(&mut self, command: Command) {
        let view_replaced = matches!(
            command,
            Command::PageLoaded { .. }
                | Command::SetQuery(_)
                | Command::PushQueryChar(_)
                | Command::PopQueryChar
                | Command::ClearQuery
        );

        if let Some(effect) = self.browser.apply(command) {
            self.fetcher.execute(effect);
        }

        if view_replaced {
            self.card_grid.reset();
        }
        self.card_grid.set_count(self.browser.filtered_len());
        self.sync_detail_modal();
    }

    /// The detail modal is open exactly while the browser shows a record
    fn sync_detail_modal(&mut self) {
        match self.browser.detail().record() {
            Some(record) => {
                if self.detail_panel.shown_id() != Some(record.id) {
                    self.detail_panel
                        .open(record, self.browser.location_source());
                }
                if let Some(pos) = self.browser.selected_position() {
                    self.card_grid.select(pos);
                }
                self.modal = Some(Modal::Detail);
            }
            None => {
                if self.modal == Some(Modal::Detail) {
                    self.modal = None;
                }
                if self.detail_panel.shown_id().is_some() {
                    self.detail_panel.reset();
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Grid
    // ─────────────────────────────────────────────────────────────

    /// Open the overlay on the highlighted card
    pub fn open_highlighted(&mut self) {
        if let Some(idx) = self.card_grid.cursor() {
            self.dispatch(Command::Select(idx));
        }
    }

    /// Highlight and open a card (mouse click)
    pub fn open_card(&mut self, idx: usize) {
        self.focused = FocusablePanel::Grid;
        self.card_grid.select(idx);
        self.dispatch(Command::Select(idx));
    }

    // ─────────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────────

    pub fn is_focused(&self, panel: FocusablePanel) -> bool {
        self.focused == panel
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next(self.show_logs);
    }

    /// Show or hide the logs panel (no-op when disabled in config)
    pub fn toggle_logs(&mut self) {
        if !self.logs_enabled {
            self.show_toast("Logs panel disabled in config");
            return;
        }
        self.show_logs = !self.show_logs;
        if !self.show_logs {
            self.focused = FocusablePanel::Grid;
        }
    }

    /// Route a key to the focused panel
    pub fn dispatch_to_focused(&mut self, key: KeyEvent) -> Handled {
        match self.focused {
            FocusablePanel::Grid => self.card_grid.handle_key(key),
            FocusablePanel::Logs => self.logs_panel.handle_key(key),
        }
    }

    /// Key hints for the status bar
    pub fn focus_hint(&self) -> Option<&'static str> {
        if self.input_mode == InputMode::Filter {
            return Some("type to filter  Enter/Esc:done  Ctrl-U:clear");
        }
        match self.modal {
            Some(Modal::Detail) => self.detail_panel.focus_hint(),
            Some(Modal::Help) => Some("?/Esc:close"),
            None => match self.focused {
                FocusablePanel::Grid => self.card_grid.focus_hint(),
                FocusablePanel::Logs => self.logs_panel.focus_hint(),
            },
        }
    }

    pub fn render_context(&self) -> RenderContext<'_> {
        let focus = match self.modal {
            Some(Modal::Detail) => super::traits::ComponentId::Detail,
            _ => self.focused.into(),
        };
        RenderContext::new(&self.theme, &self.browser, focus, self.animation_frame)
    }

    // ─────────────────────────────────────────────────────────────
    // Clipboard
    // ─────────────────────────────────────────────────────────────

    /// Copy what is in front of the user: `data` selects JSON over text
    pub fn copy(&mut self, data: bool) {
        let (content, description) = if self.modal == Some(Modal::Detail) {
            if data {
                (self.detail_panel.copy_data(), "character JSON".to_string())
            } else {
                (
                    self.detail_panel.copy_text(),
                    self.detail_panel.copy_description(),
                )
            }
        } else if self.focused == FocusablePanel::Logs {
            (
                self.logs_panel.copy_text(),
                self.logs_panel.copy_description(),
            )
        } else {
            let record = self
                .card_grid
                .cursor()
                .and_then(|idx| self.browser.filtered_record(idx));
            let content = record.and_then(|r| {
                if data {
                    serde_json::to_string_pretty(r).ok()
                } else {
                    Some(format_detail_text(r, self.browser.location_source()))
                }
            });
            let description = if data {
                "character JSON"
            } else {
                "character details"
            };
            (content, description.to_string())
        };

        let result = clipboard::copy_with_result(content, &description);
        self.toast = Some(Toast::from_copy(&result));
    }

    // ─────────────────────────────────────────────────────────────
    // Ticks, toasts, key state
    // ─────────────────────────────────────────────────────────────

    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    pub fn spinner_char(&self) -> char {
        spinner_char(self.animation_frame)
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }
}
