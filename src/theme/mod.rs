// Theme system for the TUI
//
// - TomlTheme: on-disk format with explicit semantic colors
// - Theme: resolved colors ready for rendering
//
// Theme loading priority:
// 1. External TOML themes from ~/.config/cardex/themes/*.toml
// 2. Bundled themes (compiled into the binary)
// 3. Hardcoded fallback

mod bundled;
mod toml_format;

pub use toml_format::TomlTheme;

use crate::tui::scroll::FocusablePanel;
use ratatui::style::Color;
use ratatui::widgets::BorderType;
use std::path::PathBuf;

/// Theme configuration options
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            use_theme_background: true,
        }
    }
}

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ─── Chrome ──────────────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    /// Focused border and highlighted card
    pub highlight: Color,
    pub title: Color,
    pub status_bar: Color,
    pub selection: Color,
    pub selection_fg: Color,
    pub muted: Color,
    pub border_type: BorderType,

    // ─── Character status ────────────────────────────────────
    pub status_alive: Color,
    pub status_dead: Color,
    pub status_unknown: Color,

    // ─── Fetch state ─────────────────────────────────────────
    pub loading: Color,
    pub error: Color,

    // ─── Panel identity ──────────────────────────────────────
    pub panel_grid: Color,
    pub panel_detail: Color,
    pub panel_logs: Color,
}

impl Theme {
    /// Load theme by name with default configuration
    pub fn by_name(name: &str) -> Self {
        Self::by_name_with_config(name, &ThemeConfig::default())
    }

    /// Load theme by name with custom configuration
    pub fn by_name_with_config(name: &str, config: &ThemeConfig) -> Self {
        if let Some(toml_theme) = Self::load_external(name) {
            return Self::from_toml(toml_theme, config);
        }

        if let Some(content) = bundled::find(name) {
            match TomlTheme::parse(content) {
                Ok(toml_theme) => return Self::from_toml(toml_theme, config),
                Err(e) => tracing::error!("Bundled theme '{}' is invalid: {}", name, e),
            }
        }

        tracing::warn!("Theme '{}' not found, using fallback", name);
        Self::hardcoded_default(config)
    }

    /// Look for `<name>.toml` or `<name_with_underscores>.toml` in the themes dir
    fn load_external(name: &str) -> Option<TomlTheme> {
        let dir = Self::themes_dir()?;
        let candidates = [name.to_string(), name.replace(' ', "_")];

        for stem in candidates {
            let path = dir.join(format!("{}.toml", stem));
            let Ok(contents) = std::fs::read_to_string(&path) else {
                continue;
            };
            match TomlTheme::parse(&contents) {
                Ok(theme) => return Some(theme),
                Err(e) => tracing::warn!("Ignoring theme file {}: {}", path.display(), e),
            }
        }

        None
    }

    /// Get themes directory path
    fn themes_dir() -> Option<PathBuf> {
        crate::config::Config::config_dir().map(|dir| dir.join("themes"))
    }

    /// Parse border type string to BorderType enum
    fn parse_border_type(value: Option<&str>) -> BorderType {
        match value {
            Some("rounded") => BorderType::Rounded,
            Some("double") => BorderType::Double,
            Some("thick") => BorderType::Thick,
            _ => BorderType::Plain,
        }
    }

    /// Create theme from native TOML format
    fn from_toml(toml: TomlTheme, config: &ThemeConfig) -> Self {
        let parse = TomlTheme::parse_color;

        let background = if config.use_theme_background {
            parse(&toml.ui.background)
        } else {
            Color::Reset
        };

        Self {
            name: toml.meta.name.clone(),

            background,
            foreground: parse(&toml.ui.foreground),
            border: parse(&toml.ui.border),
            highlight: parse(&toml.ui.border_focused),
            title: parse(&toml.ui.title),
            status_bar: parse(&toml.ui.status_bar),
            selection: parse(&toml.ui.selection_bg),
            selection_fg: parse(&toml.ui.selection_fg),
            muted: toml
                .ui
                .muted
                .as_deref()
                .map(parse)
                .unwrap_or_else(|| parse(&toml.ui.border)),
            border_type: Self::parse_border_type(toml.ui.border_type.as_deref()),

            status_alive: parse(&toml.status.alive),
            status_dead: parse(&toml.status.dead),
            status_unknown: parse(&toml.status.unknown),

            loading: parse(&toml.states.loading),
            error: parse(&toml.states.error),

            panel_grid: parse(&toml.panels.grid),
            panel_detail: parse(&toml.panels.detail),
            panel_logs: parse(&toml.panels.logs),
        }
    }

    /// Hardcoded fallback when no themes can be loaded
    fn hardcoded_default(config: &ThemeConfig) -> Self {
        let background = if config.use_theme_background {
            Color::Rgb(27, 30, 36)
        } else {
            Color::Reset
        };

        Self {
            name: "Portal Dark (Fallback)".to_string(),

            background,
            foreground: Color::Rgb(215, 220, 226),
            border: Color::Rgb(54, 59, 69),
            highlight: Color::Rgb(151, 206, 76),
            title: Color::Rgb(151, 206, 76),
            status_bar: Color::Rgb(169, 177, 188),
            selection: Color::Rgb(47, 58, 42),
            selection_fg: Color::Rgb(241, 245, 232),
            muted: Color::Rgb(124, 132, 144),
            border_type: BorderType::Plain,

            status_alive: Color::Rgb(151, 206, 76),
            status_dead: Color::Rgb(228, 96, 109),
            status_unknown: Color::Rgb(169, 177, 188),

            loading: Color::Rgb(240, 195, 91),
            error: Color::Rgb(228, 96, 109),

            panel_grid: Color::Rgb(68, 180, 201),
            panel_detail: Color::Rgb(151, 206, 76),
            panel_logs: Color::Rgb(195, 154, 232),
        }
    }

    /// Color for a character's status text ("Alive", "Dead", anything else)
    pub fn status_color(&self, status: &str) -> Color {
        if status.eq_ignore_ascii_case("alive") {
            self.status_alive
        } else if status.eq_ignore_ascii_case("dead") {
            self.status_dead
        } else {
            self.status_unknown
        }
    }

    /// Get border color for a panel based on focus state
    pub fn panel_border(&self, panel: FocusablePanel, focused: bool) -> Color {
        if focused {
            match panel {
                FocusablePanel::Grid => self.panel_grid,
                FocusablePanel::Logs => self.panel_logs,
            }
        } else {
            self.border
        }
    }

    /// List all available themes (bundled + external)
    pub fn list_available() -> Vec<String> {
        let mut themes = bundled::list_bundled_themes();

        if let Some(themes_dir) = Self::themes_dir() {
            if let Ok(entries) = std::fs::read_dir(themes_dir) {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.extension().is_some_and(|ext| ext == "toml") {
                        if let Some(stem) = path.file_stem() {
                            let display_name = stem.to_string_lossy().replace('_', " ");
                            if !themes.iter().any(|t| t.eq_ignore_ascii_case(&display_name)) {
                                themes.push(display_name);
                            }
                        }
                    }
                }
            }
        }

        themes
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::by_name(crate::config::DEFAULT_THEME)
    }
}

/// Ensure themes directory exists and extract bundled themes on first run
pub fn ensure_themes_extracted() {
    let Some(themes_dir) = Theme::themes_dir() else {
        return;
    };

    if std::fs::create_dir_all(&themes_dir).is_err() {
        return;
    }

    let marker = themes_dir.join(".extracted_v1");
    if marker.exists() {
        return;
    }

    for theme in bundled::BUNDLED_THEMES {
        let path = themes_dir.join(theme.filename);
        // Don't overwrite user modifications
        if !path.exists() {
            let _ = std::fs::write(&path, theme.content);
        }
    }

    let _ = std::fs::write(&marker, "1");
}
