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

//! Overlay configuration, loadable from JSON.

use crate::error::{OverlayError, OverlayResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use vantage_core::Hotkey;

/// Largest accepted `history_capacity`.
pub const MAX_HISTORY_CAPACITY: usize = 3600;

/// The initial placement of the overlay window, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowRect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 20.0,
            y: 20.0,
            width: 350.0,
            height: 500.0,
        }
    }
}

/// Tunables for sampling cadence, history size and presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Seconds between interval-FPS samples.
    pub update_interval_secs: f32,
    /// Number of interval-FPS samples kept for the rolling statistics.
    pub history_capacity: usize,
    /// Weight of the newest frame in the smoothed delta time.
    pub smoothing_factor: f32,
    /// Seconds of host time between data-rate recomputations.
    pub rate_window_secs: f64,
    /// Seconds of host time between peak data-rate resets.
    pub peak_reset_secs: f64,
    /// Key that toggles the panel.
    pub hotkey: Hotkey,
    /// Initial window placement.
    pub window: WindowRect,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            update_interval_secs: 0.5,
            history_capacity: 60,
            smoothing_factor: 0.1,
            rate_window_secs: 1.0,
            peak_reset_secs: 5.0,
            hotkey: Hotkey::F3,
            window: WindowRect::default(),
        }
    }
}

impl OverlayConfig {
    /// Parses a configuration from a JSON string and validates it.
    pub fn from_json(json: &str) -> OverlayResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a JSON file and validates it.
    pub fn from_file(path: impl AsRef<Path>) -> OverlayResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn to_file(&self, path: impl AsRef<Path>) -> OverlayResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Checks that every period and size is usable.
    pub fn validate(&self) -> OverlayResult<()> {
        if !(self.update_interval_secs > 0.0) {
            return Err(OverlayError::InvalidConfig(format!(
                "update_interval_secs must be positive, got {}",
                self.update_interval_secs
            )));
        }
        if !(1..=MAX_HISTORY_CAPACITY).contains(&self.history_capacity) {
            return Err(OverlayError::InvalidConfig(format!(
                "history_capacity must be in 1..={MAX_HISTORY_CAPACITY}, got {}",
                self.history_capacity
            )));
        }
        if !(self.smoothing_factor > 0.0 && self.smoothing_factor <= 1.0) {
            return Err(OverlayError::InvalidConfig(format!(
                "smoothing_factor must be in (0, 1], got {}",
                self.smoothing_factor
            )));
        }
        if !(self.rate_window_secs > 0.0) {
            return Err(OverlayError::InvalidConfig(format!(
                "rate_window_secs must be positive, got {}",
                self.rate_window_secs
            )));
        }
        if !(self.peak_reset_secs > 0.0) {
            return Err(OverlayError::InvalidConfig(format!(
                "peak_reset_secs must be positive, got {}",
                self.peak_reset_secs
            )));
        }
        Ok(())
    }
}
