//! Listing service error types

use std::fmt;

/// Why a page could not be loaded
///
/// Cloneable so the browser can keep the last failure around for display
/// and so commands carrying it stay plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingError {
    /// Connection, TLS or body transfer failure
    Network(String),
    /// The configured request timeout elapsed
    Timeout { url: String },
    /// Non-success HTTP status; `message` is the service's `{"error": ...}` text if any
    Status {
        status: u16,
        url: String,
        message: Option<String>,
    },
    /// Body is not the expected JSON shape; `path` locates the first violation
    Decode { path: String, message: String },
    /// Well-formed JSON that breaks a semantic rule
    Invalid(String),
}

impl ListingError {
    /// Classify a reqwest failure for `url`
    pub fn from_reqwest(err: reqwest::Error, url: &str) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else {
            Self::Network(err.to_string())
        }
    }

    /// Short label for the status bar
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Timeout { .. } => "timeout",
            Self::Status { .. } => "http",
            Self::Decode { .. } => "decode",
            Self::Invalid(_) => "invalid",
        }
    }
}

impl fmt::Display for ListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Timeout { url } => write!(f, "Timed out waiting for {}", url),
            Self::Status {
                status,
                url,
                message,
            } => match message {
                Some(message) => write!(f, "HTTP {} from {}: {}", status, url, message),
                None => write!(f, "HTTP {} from {}", status, url),
            },
            Self::Decode { path, message } => {
                write!(f, "Unexpected response shape at {}: {}", path, message)
            }
            Self::Invalid(reason) => write!(f, "Invalid response: {}", reason),
        }
    }
}

impl std::error::Error for ListingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_includes_service_message() {
        let err = ListingError::Status {
            status: 404,
            url: "https://rickandmortyapi.com/api/character?page=99".to_string(),
            message: Some("There is nothing here".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "HTTP 404 from https://rickandmortyapi.com/api/character?page=99: There is nothing here"
        );
        assert_eq!(err.kind(), "http");
    }

    #[test]
    fn test_decode_display_includes_path() {
        let err = ListingError::Decode {
            path: "results[2].name".to_string(),
            message: "invalid type: null, expected a string".to_string(),
        };
        assert!(err.to_string().contains("results[2].name"));
    }
}
