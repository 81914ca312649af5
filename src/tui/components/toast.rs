//! Short-lived message in the bottom-right corner (clipboard results,
//! disabled features). Drawn last, over everything else.

use crate::theme::Theme;
use crate::tui::traits::CopyResult;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// How long a toast stays up
const TOAST_TTL: Duration = Duration::from_secs(2);

pub struct Toast {
    pub message: String,
    /// Failure toasts get the error border
    pub is_error: bool,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
            created_at: Instant::now(),
            duration: TOAST_TTL,
        }
    }

    /// Toast describing a clipboard operation
    pub fn from_copy(result: &CopyResult) -> Self {
        Self {
            is_error: matches!(result, CopyResult::Error(_)),
            ..Self::new(result.toast_message())
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Render the toast in the bottom-right corner
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        // 2 cells of padding each side, borders included
        let width = (self.message.width() as u16 + 4).min(area.width.saturating_sub(4));
        let height = 3;

        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2);
        let toast_area = Rect::new(x, y, width, height);

        let border = if self.is_error {
            theme.error
        } else {
            theme.highlight
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(theme.background));

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(block);

        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_failure_toast_is_error() {
        let toast = Toast::from_copy(&CopyResult::error("Failed to copy"));
        assert!(toast.is_error);
        assert_eq!(toast.message, "✗ Failed to copy");
        assert!(!toast.is_expired());

        let toast = Toast::from_copy(&CopyResult::success("character JSON", 10));
        assert!(!toast.is_error);
    }
}
