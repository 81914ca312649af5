//! Listing service and detail overlay configuration

use crate::browser::LocationSource;
use serde::Deserialize;
use std::time::Duration;

/// First page of the public character listing
pub const DEFAULT_API_URL: &str = "https://rickandmortyapi.com/api/character";

// ─────────────────────────────────────────────────────────────────────────────
// Listing
// ─────────────────────────────────────────────────────────────────────────────

/// Listing service settings
#[derive(Debug, Clone)]
pub struct ListingConfig {
    /// Start link: the first page read on launch
    pub api_url: String,
    /// Per-request timeout in seconds (0 = wait indefinitely)
    pub timeout_secs: u64,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: 0,
        }
    }
}

/// Listing settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileListing {
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ListingConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileListing>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            api_url: file
                .api_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(defaults.api_url),
            timeout_secs: file.timeout_secs.unwrap_or(defaults.timeout_secs),
        }
    }

    /// Request timeout, `None` when disabled
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Detail overlay
// ─────────────────────────────────────────────────────────────────────────────

/// Detail overlay settings
#[derive(Debug, Clone, Default)]
pub struct DetailConfig {
    /// Which place feeds the overlay's location block
    pub location_source: LocationSource,
}

/// Detail settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileDetail {
    pub location_source: Option<String>,
}

impl DetailConfig {
    /// Create from file config with defaults
    ///
    /// Unknown values fall back to the default with a warning on stderr
    /// (logging is not up yet when config loads).
    pub fn from_file(file: Option<FileDetail>) -> Self {
        let file = file.unwrap_or_default();

        let location_source = match file.location_source {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                eprintln!("Warning: [detail] {}; using \"location\"", e);
                LocationSource::default()
            }),
            None => LocationSource::default(),
        };

        Self { location_source }
    }
}
