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

//! Hotkey-driven visibility of the overlay panel.

/// Whether the panel is drawn. Sampling runs in both states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// The panel is not drawn.
    #[default]
    Hidden,
    /// The panel is drawn every frame.
    Shown,
}

impl Visibility {
    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Hidden => Visibility::Shown,
            Visibility::Shown => Visibility::Hidden,
        }
    }

    /// Whether the panel is drawn.
    pub fn is_shown(self) -> bool {
        self == Visibility::Shown
    }
}

/// Flips [`Visibility`] on each press of the hotkey.
///
/// Only the up-to-down transition counts; a key held for many frames flips the
/// state once.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisibilityToggle {
    state: Visibility,
    was_down: bool,
}

impl VisibilityToggle {
    /// Creates a toggle in the `Hidden` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the hotkey's held state for this frame. Returns `true` if the
    /// visibility changed.
    pub fn update(&mut self, is_down: bool) -> bool {
        let pressed = is_down && !self.was_down;
        self.was_down = is_down;
        if pressed {
            self.state = self.state.toggled();
        }
        pressed
    }

    /// The current state.
    pub fn state(&self) -> Visibility {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        assert_eq!(VisibilityToggle::new().state(), Visibility::Hidden);
    }

    #[test]
    fn test_held_key_flips_once() {
        let mut toggle = VisibilityToggle::new();
        assert!(toggle.update(true));
        for _ in 0..30 {
            assert!(!toggle.update(true));
        }
        assert_eq!(toggle.state(), Visibility::Shown);
    }

    #[test]
    fn test_each_press_flips() {
        let mut toggle = VisibilityToggle::new();
        let frames = [true, true, false, false, true, false, true, true, false];
        let flips = frames.iter().filter(|&&down| toggle.update(down)).count();
        assert_eq!(flips, 3);
        assert_eq!(toggle.state(), Visibility::Shown);
    }

    #[test]
    fn test_release_does_not_flip() {
        let mut toggle = VisibilityToggle::new();
        toggle.update(true);
        assert!(!toggle.update(false));
        assert!(toggle.state().is_shown());
    }
}
