// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.
// Scrolling inside the detail overlay belongs to `DetailPanel`, which sees
// each key before the modal does.

use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
    /// Show the previous card of the filtered view
    PreviousRecord,
    /// Show the next card of the filtered view
    NextRecord,
    /// Copy content (readable format)
    CopyReadable,
    /// Copy content (JSON)
    CopyJson,
}

/// Available modal types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Help overlay - shows keyboard shortcuts
    Help,
    /// Character detail overlay; the record lives in the browser's selection
    Detail,
}

impl Modal {
    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Detail => match key {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => ModalAction::Close,
                KeyCode::Left | KeyCode::Char('h') => ModalAction::PreviousRecord,
                KeyCode::Right | KeyCode::Char('l') => ModalAction::NextRecord,
                KeyCode::Char('y') => ModalAction::CopyReadable,
                KeyCode::Char('Y') => ModalAction::CopyJson,
                _ => ModalAction::None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_closes_on_its_own_key() {
        assert_eq!(Modal::Help.handle_input(KeyCode::Char('?')), ModalAction::Close);
        assert_eq!(Modal::Help.handle_input(KeyCode::Char('j')), ModalAction::None);
    }

    #[test]
    fn detail_keys() {
        let modal = Modal::Detail;
        assert_eq!(modal.handle_input(KeyCode::Esc), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Char('q')), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Right), ModalAction::NextRecord);
        assert_eq!(modal.handle_input(KeyCode::Char('h')), ModalAction::PreviousRecord);
        assert_eq!(modal.handle_input(KeyCode::Char('Y')), ModalAction::CopyJson);
        assert_eq!(modal.handle_input(KeyCode::Char('x')), ModalAction::None);
    }
}
