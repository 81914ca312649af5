//! Bundled TOML themes (compiled into binary, extracted on first run)
//!
//! These themes are written to ~/.config/cardex/themes/ on first run.
//! Users can then modify them freely.

mod citadel_light;
mod portal_dark;
mod terminal;

/// Bundled theme: file name and TOML content
pub struct BundledTheme {
    pub filename: &'static str,
    pub content: &'static str,
}

/// All bundled themes, default first
pub const BUNDLED_THEMES: &[BundledTheme] = &[
    BundledTheme {
        filename: "Portal_Dark.toml",
        content: portal_dark::THEME,
    },
    BundledTheme {
        filename: "Citadel_Light.toml",
        content: citadel_light::THEME,
    },
    BundledTheme {
        filename: "Terminal.toml",
        content: terminal::THEME,
    },
];

/// Display names of the bundled themes
pub fn list_bundled_themes() -> Vec<String> {
    BUNDLED_THEMES
        .iter()
        .map(|t| t.filename.trim_end_matches(".toml").replace('_', " "))
        .collect()
}

/// Bundled theme content for a display or file name ("Portal Dark", "portal_dark")
pub fn find(name: &str) -> Option<&'static str> {
    let wanted = format!("{}.toml", name.replace(' ', "_"));
    BUNDLED_THEMES
        .iter()
        .find(|t| t.filename.eq_ignore_ascii_case(&wanted))
        .map(|t| t.content)
}
