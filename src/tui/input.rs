// Input handling - trigger once per key press
//
// Every Hookbox action is a single-shot key (no hold-to-repeat
// navigation), so each key triggers on the press state change and is
// debounced for terminals that never send release events.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum time between triggers while a key is held
/// Handles terminals that don't send Release events
const DEBOUNCE: Duration = Duration::from_millis(150);

/// Tracks the state of a single key
#[derive(Debug)]
struct KeyState {
    /// Whether the key is currently pressed
    is_pressed: bool,
    /// When the action was last triggered
    last_triggered: Option<Instant>,
}

/// Input handler that tracks per-key press state
#[derive(Default)]
pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press event
    /// Returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        let now = Instant::now();
        let state = self.key_states.entry(key).or_insert(KeyState {
            is_pressed: false,
            last_triggered: None,
        });

        if state.is_pressed {
            // Key held (or terminal without release events): debounce
            match state.last_triggered {
                Some(last) if now.duration_since(last) >= DEBOUNCE => {
                    state.last_triggered = Some(now);
                    true
                }
                _ => false,
            }
        } else {
            // New key press - always trigger
            state.is_pressed = true;
            state.last_triggered = Some(now);
            true
        }
    }

    /// Handle a key release event
    pub fn handle_key_release(&mut self, key: KeyCode) {
        if let Some(state) = self.key_states.get_mut(&key) {
            state.is_pressed = false;
            state.last_triggered = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn no_repeat_while_held() {
        let mut handler = InputHandler::new();

        // First press triggers
        assert!(handler.handle_key_press(KeyCode::Char('c')));

        // Subsequent presses while held don't trigger
        assert!(!handler.handle_key_press(KeyCode::Char('c')));
        assert!(!handler.handle_key_press(KeyCode::Char('c')));

        // Release
        handler.handle_key_release(KeyCode::Char('c'));

        // Next press triggers again
        assert!(handler.handle_key_press(KeyCode::Char('c')));
    }

    #[test]
    fn held_key_retriggers_after_debounce() {
        let mut handler = InputHandler::new();

        assert!(handler.handle_key_press(KeyCode::Char('p')));
        assert!(!handler.handle_key_press(KeyCode::Char('p')));

        // Simulate a terminal that never sends Release
        thread::sleep(DEBOUNCE + Duration::from_millis(10));
        assert!(handler.handle_key_press(KeyCode::Char('p')));
    }

    #[test]
    fn keys_are_tracked_independently() {
        let mut handler = InputHandler::new();

        assert!(handler.handle_key_press(KeyCode::Char('o')));
        assert!(handler.handle_key_press(KeyCode::Char('m')));
        assert!(!handler.handle_key_press(KeyCode::Char('o')));
    }
}
