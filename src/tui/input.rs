// Key repeat policy for command keys
//
// Terminals report a held key as a stream of presses. Movement keys should
// repeat (after a delay); command keys such as `]` or `r` must fire once per
// physical press, otherwise holding `]` would skip pages.
//
// Filter text entry bypasses this: typed characters are never debounced.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// A repeated press of a `Once` key this long after the last trigger counts
/// as a new press (terminals that never send release events)
const ONCE_REARM: Duration = Duration::from_millis(150);

/// How a key behaves while held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    /// Fires on press only
    Once,
    /// Fires on press, then every `every` after `delay`
    Repeat { delay: Duration, every: Duration },
}

impl KeyBehavior {
    /// Grid cursor and line scrolling
    pub const MOVE: Self = Self::Repeat {
        delay: Duration::from_millis(500),
        every: Duration::from_millis(50),
    };

    /// Home/End
    pub const JUMP: Self = Self::Repeat {
        delay: Duration::from_millis(300),
        every: Duration::from_millis(30),
    };
}

/// A key between its first press and its release
#[derive(Debug, Clone, Copy)]
struct Held {
    since: Instant,
    last_fired: Instant,
}

/// Decides which key presses trigger an action
pub struct InputHandler {
    behaviors: HashMap<KeyCode, KeyBehavior>,
    held: HashMap<KeyCode, Held>,
}

impl InputHandler {
    /// Every key behaves as `Once` until configured otherwise
    pub fn new() -> Self {
        Self {
            behaviors: HashMap::new(),
            held: HashMap::new(),
        }
    }

    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.behaviors.insert(*key, behavior);
        }
    }

    /// Bindings for the character browser: movement repeats, commands don't
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();
        handler.configure_keys(
            &[
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Left,
                KeyCode::Right,
                KeyCode::Char('h'),
                KeyCode::Char('j'),
                KeyCode::Char('k'),
                KeyCode::Char('l'),
            ],
            KeyBehavior::MOVE,
        );
        handler.configure_keys(&[KeyCode::Home, KeyCode::End], KeyBehavior::JUMP);
        handler
    }

    /// Whether this press should trigger its action
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        let now = Instant::now();
        let behavior = self
            .behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::Once);

        let Some(held) = self.held.get_mut(&key) else {
            self.held.insert(
                key,
                Held {
                    since: now,
                    last_fired: now,
                },
            );
            return true;
        };

        let fire = match behavior {
            KeyBehavior::Once => now.duration_since(held.last_fired) >= ONCE_REARM,
            KeyBehavior::Repeat { delay, every } => {
                now.duration_since(held.since) >= delay
                    && now.duration_since(held.last_fired) >= every
            }
        };
        if fire {
            held.last_fired = now;
        }
        fire
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_once_keys_fire_per_press() {
        let mut handler = InputHandler::new();

        assert!(handler.handle_key_press(KeyCode::Enter));
        assert!(!handler.handle_key_press(KeyCode::Enter));
        assert!(!handler.handle_key_press(KeyCode::Enter));

        handler.handle_key_release(KeyCode::Enter);
        assert!(handler.handle_key_press(KeyCode::Enter));
    }

    #[test]
    fn test_once_key_rearms_without_release() {
        let mut handler = InputHandler::new();
        assert!(handler.handle_key_press(KeyCode::Char('r')));

        thread::sleep(ONCE_REARM + Duration::from_millis(10));
        assert!(handler.handle_key_press(KeyCode::Char('r')));
    }

    #[test]
    fn test_repeat_waits_for_delay() {
        let mut handler = InputHandler::new();
        handler.configure_keys(
            &[KeyCode::Down],
            KeyBehavior::Repeat {
                delay: Duration::from_millis(100),
                every: Duration::from_millis(50),
            },
        );

        assert!(handler.handle_key_press(KeyCode::Down));
        assert!(!handler.handle_key_press(KeyCode::Down));

        thread::sleep(Duration::from_millis(110));
        assert!(handler.handle_key_press(KeyCode::Down));
        assert!(!handler.handle_key_press(KeyCode::Down));

        thread::sleep(Duration::from_millis(60));
        assert!(handler.handle_key_press(KeyCode::Down));
    }

    #[test]
    fn test_page_keys_do_not_repeat_while_held() {
        let mut handler = InputHandler::with_default_config();
        assert!(handler.handle_key_press(KeyCode::Char(']')));
        assert!(!handler.handle_key_press(KeyCode::Char(']')));
    }
}
