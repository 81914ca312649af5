//! `[logging]` section: filter level and optional JSON log files

use serde::Deserialize;
use std::path::PathBuf;
use tracing_appender::rolling::Rotation;

const DEFAULT_LEVEL: &str = "info";
const DEFAULT_DIR: &str = "./logs";
const DEFAULT_PREFIX: &str = "cardex";

/// When the JSON log file rolls over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// One file for the lifetime of the directory
    Never,
}

impl LogRotation {
    /// Case-insensitive; anything unrecognized is daily
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("hourly") {
            Self::Hourly
        } else if value.eq_ignore_ascii_case("never") {
            Self::Never
        } else {
            Self::Daily
        }
    }

    /// Spelling used in the config file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

impl From<LogRotation> for Rotation {
    fn from(rotation: LogRotation) -> Self {
        match rotation {
            LogRotation::Hourly => Rotation::HOURLY,
            LogRotation::Daily => Rotation::DAILY,
            LogRotation::Never => Rotation::NEVER,
        }
    }
}

/// Effective logging settings
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Bare level ("debug") or a full EnvFilter directive
    pub level: String,
    /// Also write JSON lines to `file_dir`
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name stem; the appender adds the date
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
            file_enabled: false,
            file_dir: PathBuf::from(DEFAULT_DIR),
            file_rotation: LogRotation::default(),
            file_prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

/// `[logging]` as written in the file; every key optional
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    /// Fill the keys the file leaves out with defaults
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let FileLogging {
            level,
            file_enabled,
            file_dir,
            file_rotation,
            file_prefix,
        } = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            level: level.unwrap_or(defaults.level),
            file_enabled: file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file_dir.map_or(defaults.file_dir, PathBuf::from),
            file_rotation: file_rotation.map_or(defaults.file_rotation, |r| LogRotation::parse(&r)),
            file_prefix: file_prefix.unwrap_or(defaults.file_prefix),
        }
    }
}
