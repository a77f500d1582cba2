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

//! Per-frame collection of every counter the overlay displays.

use crate::config::OverlayConfig;
use crate::frame::{FpsHistory, FrameTiming};
use crate::network::NetworkMonitor;
use vantage_core::{
    MemorySnapshot, MemoryStatsProvider, NetworkStatsProvider, RenderingSnapshot,
    RenderingStatsProvider,
};

/// Owns all sampled and derived state.
///
/// The rendering and network capabilities are optional; when absent their
/// state is simply never updated and the presenter skips their sections.
#[derive(Debug)]
pub struct Sampler {
    timing: FrameTiming,
    history: FpsHistory,
    memory_provider: Box<dyn MemoryStatsProvider>,
    memory: MemorySnapshot,
    rendering_provider: Option<Box<dyn RenderingStatsProvider>>,
    rendering: RenderingSnapshot,
    network: Option<NetworkMonitor>,
    rate_window_secs: f64,
    peak_reset_secs: f64,
    started: bool,
}

impl Sampler {
    /// Creates a sampler reading memory from `memory_provider`.
    pub fn new(config: &OverlayConfig, memory_provider: Box<dyn MemoryStatsProvider>) -> Self {
        Self {
            timing: FrameTiming::new(config.update_interval_secs, config.smoothing_factor),
            history: FpsHistory::new(config.history_capacity),
            memory_provider,
            memory: MemorySnapshot::default(),
            rendering_provider: None,
            rendering: RenderingSnapshot::default(),
            network: None,
            rate_window_secs: config.rate_window_secs,
            peak_reset_secs: config.peak_reset_secs,
            started: false,
        }
    }

    /// Attaches a renderer statistics capability.
    pub fn set_rendering_provider(&mut self, provider: Box<dyn RenderingStatsProvider>) {
        self.rendering_provider = Some(provider);
    }

    /// Attaches a network statistics capability.
    pub fn set_network_provider(&mut self, provider: Box<dyn NetworkStatsProvider>) {
        // Attached mid-session, the monitor anchors its clocks on its first sample.
        self.network = Some(NetworkMonitor::new(
            provider,
            self.rate_window_secs,
            self.peak_reset_secs,
        ));
    }

    /// Samples one frame. `now` is the host clock in seconds and `raw_delta`
    /// the unscaled frame delta in seconds.
    pub fn advance_frame(&mut self, now: f64, raw_delta: f32) {
        if !self.started {
            if let Some(network) = self.network.as_mut() {
                network.start(now);
            }
            self.started = true;
        }

        if let Some(fps) = self.timing.advance(raw_delta) {
            self.history.push(fps);
            log::trace!("Interval FPS sample: {fps:.1}");
        }

        if let Some(network) = self.network.as_mut() {
            network.sample(now);
        }

        self.memory.refresh(self.memory_provider.as_ref());

        if let Some(provider) = self.rendering_provider.as_deref() {
            self.rendering = provider.counters();
        }
    }

    /// Frame timing state.
    pub fn timing(&self) -> &FrameTiming {
        &self.timing
    }

    /// Retained interval-FPS samples.
    pub fn history(&self) -> &FpsHistory {
        &self.history
    }

    /// Latest memory readings.
    pub fn memory(&self) -> &MemorySnapshot {
        &self.memory
    }

    /// Latest renderer counters, if a rendering capability is attached.
    pub fn rendering(&self) -> Option<(&RenderingSnapshot, &dyn RenderingStatsProvider)> {
        self.rendering_provider
            .as_deref()
            .map(|provider| (&self.rendering, provider))
    }

    /// Network state, if a network capability is attached.
    pub fn network(&self) -> Option<&NetworkMonitor> {
        self.network.as_ref()
    }
}
