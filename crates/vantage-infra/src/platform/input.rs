// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Translates `winit` keyboard events into the overlay's hotkey state.
//!
//! The overlay wants "is the toggle key held this frame"; `winit` delivers
//! press/release events. `HotkeyListener` sits between the two so the rest of
//! the overlay never sees `winit` types.

use vantage_core::Hotkey;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Maps a backend-agnostic [`Hotkey`] to the physical `winit` key.
pub fn hotkey_key_code(hotkey: Hotkey) -> KeyCode {
    match hotkey {
        Hotkey::F1 => KeyCode::F1,
        Hotkey::F2 => KeyCode::F2,
        Hotkey::F3 => KeyCode::F3,
        Hotkey::F4 => KeyCode::F4,
        Hotkey::F5 => KeyCode::F5,
        Hotkey::F6 => KeyCode::F6,
        Hotkey::F7 => KeyCode::F7,
        Hotkey::F8 => KeyCode::F8,
        Hotkey::F9 => KeyCode::F9,
        Hotkey::F10 => KeyCode::F10,
        Hotkey::F11 => KeyCode::F11,
        Hotkey::F12 => KeyCode::F12,
        Hotkey::Backquote => KeyCode::Backquote,
        Hotkey::Insert => KeyCode::Insert,
        Hotkey::Pause => KeyCode::Pause,
    }
}

/// Tracks whether the overlay's toggle key is currently held.
#[derive(Debug, Clone)]
pub struct HotkeyListener {
    key: KeyCode,
    held: bool,
}

impl HotkeyListener {
    /// Creates a listener for `hotkey`.
    pub fn new(hotkey: Hotkey) -> Self {
        Self {
            key: hotkey_key_code(hotkey),
            held: false,
        }
    }

    /// Feeds a window event. Non-keyboard events are ignored, except focus loss,
    /// which releases the key since its release event will never arrive.
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_key(event.physical_key, event.state);
            }
            WindowEvent::Focused(false) => self.held = false,
            _ => {}
        }
    }

    /// Feeds a single key transition.
    pub fn handle_key(&mut self, key: PhysicalKey, state: ElementState) {
        if key == PhysicalKey::Code(self.key) {
            self.held = state == ElementState::Pressed;
        }
    }

    /// Whether the key is held right now.
    pub fn is_down(&self) -> bool {
        self.held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_configured_key_only() {
        let mut listener = HotkeyListener::new(Hotkey::F3);
        listener.handle_key(PhysicalKey::Code(KeyCode::F4), ElementState::Pressed);
        assert!(!listener.is_down());

        listener.handle_key(PhysicalKey::Code(KeyCode::F3), ElementState::Pressed);
        assert!(listener.is_down());

        // Key repeat delivers more presses; the key stays held.
        listener.handle_key(PhysicalKey::Code(KeyCode::F3), ElementState::Pressed);
        assert!(listener.is_down());

        listener.handle_key(PhysicalKey::Code(KeyCode::F3), ElementState::Released);
        assert!(!listener.is_down());
    }

    #[test]
    fn test_focus_loss_releases_key() {
        let mut listener = HotkeyListener::new(Hotkey::Backquote);
        listener.handle_key(PhysicalKey::Code(KeyCode::Backquote), ElementState::Pressed);
        listener.handle_window_event(&WindowEvent::Focused(false));
        assert!(!listener.is_down());
    }

    #[test]
    fn test_hotkey_mapping() {
        assert_eq!(hotkey_key_code(Hotkey::F3), KeyCode::F3);
        assert_eq!(hotkey_key_code(Hotkey::Pause), KeyCode::Pause);
    }
}
