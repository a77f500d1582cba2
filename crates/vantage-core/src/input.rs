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

//! Backend-agnostic identifiers for the overlay toggle key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A key that can be bound to toggle the overlay.
///
/// The set is deliberately limited to keys that games rarely bind to gameplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Hotkey {
    /// Function key 1.
    F1,
    /// Function key 2.
    F2,
    /// Function key 3.
    #[default]
    F3,
    /// Function key 4.
    F4,
    /// Function key 5.
    F5,
    /// Function key 6.
    F6,
    /// Function key 7.
    F7,
    /// Function key 8.
    F8,
    /// Function key 9.
    F9,
    /// Function key 10.
    F10,
    /// Function key 11.
    F11,
    /// Function key 12.
    F12,
    /// The backquote/tilde key, a common console key.
    Backquote,
    /// The Insert key.
    Insert,
    /// The Pause/Break key.
    Pause,
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hotkey_is_f3() {
        assert_eq!(Hotkey::default(), Hotkey::F3);
    }

    #[test]
    fn test_hotkey_deserializes_from_key_name() {
        let key: Hotkey = serde_json::from_str("\"Backquote\"").unwrap();
        assert_eq!(key, Hotkey::Backquote);
        assert_eq!(key.to_string(), "Backquote");
    }
}
