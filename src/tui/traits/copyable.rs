//! Clipboard sources: `y` copies text, `Y` copies JSON

use super::Component;

pub trait Copyable: Component {
    /// Readable rendering of what the component shows, `None` when empty
    fn copy_text(&self) -> Option<String>;

    /// JSON rendering; most panels have none
    fn copy_data(&self) -> Option<String> {
        None
    }

    /// Noun phrase for the toast ("character details", "logs")
    fn copy_description(&self) -> String {
        format!("{:?}", self.id()).to_lowercase()
    }
}

/// Outcome of a `y`/`Y` press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyResult {
    Copied { what: String, bytes: usize },
    Empty,
    Error(String),
}

impl CopyResult {
    pub fn success(what: impl Into<String>, bytes: usize) -> Self {
        Self::Copied {
            what: what.into(),
            bytes,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    pub fn toast_message(&self) -> String {
        match self {
            Self::Copied { what, bytes } if *bytes >= 1024 => {
                format!("✓ Copied {} ({:.1} KiB)", what, *bytes as f64 / 1024.0)
            }
            Self::Copied { what, bytes } => format!("✓ Copied {} ({} B)", what, bytes),
            Self::Empty => "Nothing to copy".to_string(),
            Self::Error(msg) => format!("✗ {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_messages() {
        assert_eq!(
            CopyResult::success("character details", 120).toast_message(),
            "✓ Copied character details (120 B)"
        );
        assert_eq!(
            CopyResult::success("logs", 3072).toast_message(),
            "✓ Copied logs (3.0 KiB)"
        );
        assert_eq!(CopyResult::Empty.toast_message(), "Nothing to copy");
        assert_eq!(
            CopyResult::error("Failed to copy").toast_message(),
            "✗ Failed to copy"
        );
    }
}
