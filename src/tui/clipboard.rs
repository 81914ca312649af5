//! Clipboard helper for the detail overlay and logs panel
//!
//! Uses `arboard` for cross-platform support (Windows, macOS, Linux).
//! The clipboard is opened fresh on each copy so no handle outlives the call.

use crate::tui::traits::CopyResult;
use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard
///
/// Common failure cases: no display server (headless Linux), permission denied.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}

/// Copy `content` if there is any, describing the outcome for a toast
pub fn copy_with_result(content: Option<String>, description: &str) -> CopyResult {
    let Some(text) = content else {
        return CopyResult::Empty;
    };

    match copy_to_clipboard(&text) {
        Ok(()) => CopyResult::success(description, text.len()),
        Err(e) => {
            tracing::warn!("Clipboard copy failed: {:#}", e);
            CopyResult::error("Failed to copy")
        }
    }
}
