//! Keyboard Input Module
//!
//! Held-state tracking for the four movement keys.
//! Decoupled from winit; the binary translates raw key codes into
//! [`MoveKey`] values before they reach this module.

/// The closed set of keys the game recognizes for continuous movement.
///
/// Everything else (level select, exit) is edge-triggered in the event
/// handler and never stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKey {
    /// W - nudge the craft up the field
    Up,
    /// S - nudge the craft down the field
    Down,
    /// A - nudge the craft left
    Left,
    /// D - nudge the craft right
    Right,
}

/// Pressed-state map over [`MoveKey`].
///
/// Holding a key keeps its flag set between key-down and key-up, so the
/// per-frame input poll sees held keys without key-repeat events.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMap {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl KeyMap {
    /// Create a new key map with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update held state from a key press/release transition.
    pub fn handle_key(&mut self, key: MoveKey, pressed: bool) {
        match key {
            MoveKey::Up => self.up = pressed,
            MoveKey::Down => self.down = pressed,
            MoveKey::Left => self.left = pressed,
            MoveKey::Right => self.right = pressed,
        }
    }

    /// Check if any movement key is currently held.
    pub fn any_pressed(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Left/right movement direction (-1, 0, or 1).
    pub fn horizontal_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }

    /// Up/down movement direction (-1, 0, or 1).
    pub fn vertical_axis(&self) -> i32 {
        (self.up as i32) - (self.down as i32)
    }

    /// Reset all keys to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_map_default() {
        let keys = KeyMap::new();
        assert!(!keys.any_pressed());
        assert_eq!(keys.horizontal_axis(), 0);
        assert_eq!(keys.vertical_axis(), 0);
    }

    #[test]
    fn test_key_map_hold_and_release() {
        let mut keys = KeyMap::new();
        keys.handle_key(MoveKey::Up, true);
        assert!(keys.up);
        assert!(keys.any_pressed());
        assert_eq!(keys.vertical_axis(), 1);

        keys.handle_key(MoveKey::Up, false);
        assert!(!keys.any_pressed());
        assert_eq!(keys.vertical_axis(), 0);
    }

    #[test]
    fn test_opposed_keys_cancel() {
        let mut keys = KeyMap::new();
        keys.handle_key(MoveKey::Left, true);
        keys.handle_key(MoveKey::Right, true);
        assert_eq!(keys.horizontal_axis(), 0);

        keys.handle_key(MoveKey::Left, false);
        assert_eq!(keys.horizontal_axis(), 1);
    }

    #[test]
    fn test_reset_releases_everything() {
        let mut keys = KeyMap::new();
        keys.handle_key(MoveKey::Down, true);
        keys.handle_key(MoveKey::Right, true);
        keys.reset();
        assert!(!keys.any_pressed());
    }
}
