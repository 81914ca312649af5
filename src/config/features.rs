//! Feature flags configuration
//!
//! Flags for optional TUI modules (opt-out: default enabled).

use serde::Deserialize;

/// Feature flags for optional modules (opt-out: default enabled)
#[derive(Debug, Clone)]
pub struct Features {
    /// Logs panel: in-app view of the tracing buffer (`L`)
    pub logs_panel: bool,

    /// Mouse capture: click a card to open it, wheel to scroll
    pub mouse: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            logs_panel: true,
            mouse: true,
        }
    }
}

/// Feature flags as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileFeatures {
    pub logs_panel: Option<bool>,
    pub mouse: Option<bool>,
}

impl Features {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileFeatures>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            logs_panel: file.logs_panel.unwrap_or(defaults.logs_panel),
            mouse: file.mouse.unwrap_or(defaults.mouse),
        }
    }
}
