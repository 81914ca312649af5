//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config file, with comments, for the current values
    pub fn to_toml(&self) -> String {
        format!(
            r#"# cardex configuration

# Theme: Portal Dark, Citadel Light, Terminal, or a file in ~/.config/cardex/themes
theme = "{theme}"

# Use theme's background color (true) or terminal's default (false)
use_theme_background = {use_bg}

# Listing service (CARDEX_API_URL env var overrides api_url)
[listing]
api_url = "{api_url}"
# Seconds to wait for a page (0 = no timeout)
timeout_secs = {timeout_secs}

# Detail overlay
[detail]
# Which place the "Location" block shows: "location" (current location)
# or "origin" (repeat the origin, as older builds did)
location_source = "{location_source}"

# Feature flags
[features]
logs_panel = {logs_panel}
mouse = {mouse}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# JSON file logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = escape(&self.theme),
            use_bg = self.use_theme_background,
            api_url = escape(&self.listing.api_url),
            timeout_secs = self.listing.timeout_secs,
            location_source = self.detail.location_source.as_str(),
            logs_panel = self.features.logs_panel,
            mouse = self.features.mouse,
            log_level = escape(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = escape(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = escape(&self.logging.file_prefix),
        )
    }
}

/// Escape a value for a TOML basic string
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
