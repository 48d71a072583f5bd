//! Polled input snapshot
//!
//! Device polling lives outside the core; behaviours read an already
//! populated [`InputState`] each frame.

use std::collections::HashSet;

/// Keys the engine cares about
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Space,
    Shift,
}

/// Snapshot of input for one frame
#[derive(Clone, Debug, Default)]
pub struct InputState {
    pressed: HashSet<Key>,
    /// Mouse movement since last frame, in screen units
    pub mouse_delta: (f32, f32),
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.pressed.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.pressed.remove(&key);
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    pub fn set_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.mouse_delta = (dx, dy);
    }

    /// Clear per-frame deltas; held keys persist
    pub fn end_frame(&mut self) {
        self.mouse_delta = (0.0, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release() {
        let mut input = InputState::new();
        input.press(Key::W);
        assert!(input.is_pressed(Key::W));
        assert!(!input.is_pressed(Key::S));
        input.release(Key::W);
        assert!(!input.is_pressed(Key::W));
    }

    #[test]
    fn test_end_frame_clears_mouse_delta_not_keys() {
        let mut input = InputState::new();
        input.press(Key::Space);
        input.set_mouse_delta(3.0, -2.0);
        input.end_frame();
        assert_eq!(input.mouse_delta, (0.0, 0.0));
        assert!(input.is_pressed(Key::Space));
    }
}
