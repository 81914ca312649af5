// TOML theme format parser
//
// Native theme format for cardex. Each theme defines every semantic color
// explicitly; only `muted` and `border_type` are optional.

use ratatui::style::Color;
use serde::Deserialize;

/// Root structure for TOML theme files
#[derive(Debug, Clone, Deserialize)]
pub struct TomlTheme {
    pub meta: ThemeMeta,
    pub ui: UiColors,
    pub status: StatusColors,
    pub states: StateColors,
    pub panels: PanelColors,
}

/// Theme metadata; unknown keys such as `author` are ignored
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeMeta {
    pub name: String,
}

/// Base UI chrome colors
#[derive(Debug, Clone, Deserialize)]
pub struct UiColors {
    pub background: String,
    pub foreground: String,
    pub border: String,
    pub border_focused: String,
    pub title: String,
    pub status_bar: String,
    pub selection_bg: String,
    pub selection_fg: String,
    /// Secondary text (falls back to border)
    pub muted: Option<String>,
    /// "plain", "rounded", "double", "thick" (default: plain)
    pub border_type: Option<String>,
}

/// Character status colors (cards and detail)
#[derive(Debug, Clone, Deserialize)]
pub struct StatusColors {
    pub alive: String,
    pub dead: String,
    pub unknown: String,
}

/// Fetch state colors (pager and status bar)
#[derive(Debug, Clone, Deserialize)]
pub struct StateColors {
    pub loading: String,
    pub error: String,
}

/// Panel identity colors (focused border)
#[derive(Debug, Clone, Deserialize)]
pub struct PanelColors {
    pub grid: String,
    pub detail: String,
    pub logs: String,
}

impl TomlTheme {
    /// Parse a TOML theme from string
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Parse a color string to ratatui Color
    /// Supports:
    /// - Hex format: #RRGGBB
    /// - ANSI format: ansi:0-15, ansi:fg, ansi:bg (terminal-native colors)
    pub fn parse_color(value: &str) -> Color {
        if let Some(ansi) = value.strip_prefix("ansi:") {
            return match ansi {
                "0" => Color::Black,
                "1" => Color::Red,
                "2" => Color::Green,
                "3" => Color::Yellow,
                "4" => Color::Blue,
                "5" => Color::Magenta,
                "6" => Color::Cyan,
                "7" => Color::White,
                "8" => Color::DarkGray,
                "9" => Color::LightRed,
                "10" => Color::LightGreen,
                "11" => Color::LightYellow,
                "12" => Color::LightBlue,
                "13" => Color::LightMagenta,
                "14" => Color::LightCyan,
                "15" => Color::Gray,
                "fg" | "bg" => Color::Reset,
                _ => Color::White,
            };
        }

        let hex = value.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Color::White;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        Color::Rgb(channel(0..2), channel(2..4), channel(4..6))
    }
}
