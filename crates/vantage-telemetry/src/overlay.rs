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

//! The diagnostics overlay service, driven by the host's frame loop.

use crate::config::OverlayConfig;
use crate::error::OverlayResult;
use crate::network::log_network_event;
use crate::presenter::{OverlayPanel, Presenter};
use crate::sampler::Sampler;
use crate::visibility::{Visibility, VisibilityToggle};
use vantage_core::{
    Hotkey, MemoryStatsProvider, NetworkEvent, NetworkStatsProvider, RenderingStatsProvider,
    SystemInfoProvider,
};

/// An in-game diagnostics overlay.
///
/// The host adapter calls, once per frame and in this order:
/// [`update_hotkey`](Self::update_hotkey) with the toggle key's held state,
/// [`advance_frame`](Self::advance_frame) with its clock, and, from its draw
/// callback, [`render`](Self::render).
#[derive(Debug)]
pub struct DiagnosticsOverlay {
    config: OverlayConfig,
    sampler: Sampler,
    system: Box<dyn SystemInfoProvider>,
    toggle: VisibilityToggle,
    time_scale: f32,
}

impl DiagnosticsOverlay {
    /// Creates an overlay with the mandatory memory and system capabilities.
    pub fn new(
        config: OverlayConfig,
        memory: Box<dyn MemoryStatsProvider>,
        system: Box<dyn SystemInfoProvider>,
    ) -> OverlayResult<Self> {
        config.validate()?;
        log::info!(
            "Diagnostics overlay created (toggle: {}, interval: {}s, history: {} samples)",
            config.hotkey,
            config.update_interval_secs,
            config.history_capacity
        );
        Ok(Self {
            sampler: Sampler::new(&config, memory),
            config,
            system,
            toggle: VisibilityToggle::new(),
            time_scale: 1.0,
        })
    }

    /// Adds the Rendering section, fed by `provider`.
    pub fn with_rendering(mut self, provider: Box<dyn RenderingStatsProvider>) -> Self {
        self.sampler.set_rendering_provider(provider);
        self
    }

    /// Adds the Network section, fed by `provider`.
    pub fn with_network(mut self, provider: Box<dyn NetworkStatsProvider>) -> Self {
        self.sampler.set_network_provider(provider);
        self
    }

    /// Samples one frame. `now` is the host clock and `raw_delta` the unscaled
    /// frame delta, both in seconds. Runs whether or not the panel is shown.
    pub fn advance_frame(&mut self, now: f64, raw_delta: f32) {
        self.sampler.advance_frame(now, raw_delta);
    }

    /// Feeds the toggle key's held state. Returns `true` if visibility changed.
    pub fn update_hotkey(&mut self, is_down: bool) -> bool {
        let changed = self.toggle.update(is_down);
        if changed {
            log::info!("Diagnostics overlay {:?}", self.toggle.state());
        }
        changed
    }

    /// Records the host's current time scale for display.
    pub fn set_time_scale(&mut self, time_scale: f32) {
        self.time_scale = time_scale;
    }

    /// Formats the panel, or returns `None` while hidden.
    pub fn render(&self) -> Option<OverlayPanel> {
        if !self.is_visible() {
            return None;
        }
        let presenter = Presenter::new(
            &self.sampler,
            self.system.as_ref(),
            self.time_scale,
            self.config.window,
        );
        Some(presenter.render())
    }

    /// Logs a networking lifecycle callback. Does not affect overlay state.
    pub fn handle_network_event(&self, event: &NetworkEvent) {
        log_network_event(event);
    }

    /// Current visibility.
    pub fn visibility(&self) -> Visibility {
        self.toggle.state()
    }

    /// Whether the panel is drawn.
    pub fn is_visible(&self) -> bool {
        self.toggle.state().is_shown()
    }

    /// The key bound to the toggle.
    pub fn hotkey(&self) -> Hotkey {
        self.config.hotkey
    }

    /// The active configuration.
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Sampled state, for hosts that draw their own widgets.
    pub fn sampler(&self) -> &Sampler {
        &self.sampler
    }
}
