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

//! Formats sampled state into the sections of the overlay panel.
//!
//! The presenter is pure formatting: it reads what the [`Sampler`] collected,
//! plus the few host values that are read at draw time (screen resolution,
//! quality level, current ping, room and system information), and produces an
//! [`OverlayPanel`] that any immediate-mode backend can draw.

use crate::config::WindowRect;
use crate::network::NetworkMonitor;
use crate::sampler::Sampler;
use vantage_core::{RenderingSnapshot, RenderingStatsProvider, SystemInfoProvider};

/// Title of the performance section.
pub const PERFORMANCE: &str = "Performance";
/// Title of the memory section.
pub const MEMORY: &str = "Memory";
/// Title of the network section.
pub const NETWORK: &str = "Network";
/// Title of the rendering section.
pub const RENDERING: &str = "Rendering";
/// Title of the system section.
pub const SYSTEM: &str = "System";

/// A titled group of display lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSection {
    /// Section heading.
    pub title: &'static str,
    /// Formatted `Label: value` lines.
    pub lines: Vec<String>,
}

impl PanelSection {
    fn new(title: &'static str) -> Self {
        Self {
            title,
            lines: Vec::new(),
        }
    }

    fn line(&mut self, text: String) -> &mut Self {
        self.lines.push(text);
        self
    }
}

/// Everything needed to draw one frame of the overlay window.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayPanel {
    /// Window title.
    pub title: &'static str,
    /// Initial window placement; the backend owns dragging afterwards.
    pub rect: WindowRect,
    /// Sections, in display order.
    pub sections: Vec<PanelSection>,
}

impl OverlayPanel {
    /// Looks up a section by title.
    pub fn section(&self, title: &str) -> Option<&PanelSection> {
        self.sections.iter().find(|section| section.title == title)
    }

    /// Flattens the panel into display lines: each heading followed by its lines.
    pub fn lines(&self) -> Vec<String> {
        self.sections
            .iter()
            .flat_map(|section| {
                std::iter::once(section.title.to_string()).chain(section.lines.iter().cloned())
            })
            .collect()
    }
}

/// Builds an [`OverlayPanel`] from sampled state.
pub struct Presenter<'a> {
    sampler: &'a Sampler,
    system: &'a dyn SystemInfoProvider,
    time_scale: f32,
    rect: WindowRect,
}

impl<'a> Presenter<'a> {
    /// Creates a presenter over the given state.
    pub fn new(
        sampler: &'a Sampler,
        system: &'a dyn SystemInfoProvider,
        time_scale: f32,
        rect: WindowRect,
    ) -> Self {
        Self {
            sampler,
            system,
            time_scale,
            rect,
        }
    }

    /// Formats every section.
    pub fn render(&self) -> OverlayPanel {
        let mut sections = vec![self.performance(), self.memory()];
        if let Some(network) = self.sampler.network() {
            sections.push(network_section(network));
        }
        if let Some((counters, provider)) = self.sampler.rendering() {
            sections.push(rendering_section(counters, provider));
        }
        sections.push(self.system());

        let title = if self.sampler.network().is_some() {
            "Network Diagnostics"
        } else {
            "Diagnostics"
        };

        OverlayPanel {
            title,
            rect: self.rect,
            sections,
        }
    }

    fn performance(&self) -> PanelSection {
        let timing = self.sampler.timing();
        let history = self.sampler.history();
        let mut section = PanelSection::new(PERFORMANCE);
        section
            .line(format!(
                "FPS: {:.0} ({:.1} ms)",
                timing.fps(),
                timing.smoothed_frame_ms()
            ))
            .line(format!("Avg FPS (1min): {:.0}", history.average()))
            .line(format!("Min FPS (1min): {:.0}", history.min()))
            .line(format!("Max FPS (1min): {:.0}", history.max()))
            .line(format!("Time Scale: {:.2}", self.time_scale));
        section
    }

    fn memory(&self) -> PanelSection {
        let memory = self.sampler.memory();
        let mut section = PanelSection::new(MEMORY);
        section
            .line(format!("Allocated: {} MB", memory.allocated_mb))
            .line(format!("Reserved: {} MB", memory.reserved_mb))
            .line(format!("Unused Reserved: {} MB", memory.unused_reserved_mb))
            .line(format!("Managed Heap: {} MB", memory.managed_heap_mb))
            .line(format!("Graphics Driver: {} MB", memory.graphics_driver_mb));
        section
    }

    fn system(&self) -> PanelSection {
        let report = self.system.system_report();
        let gfx = &report.graphics;
        let mut section = PanelSection::new(SYSTEM);
        section
            .line(format!("OS: {}", report.operating_system))
            .line(format!("Device: {}", report.device_model))
            .line(format!("CPU: {}", report.cpu_name))
            .line(format!("CPU Cores: {}", report.cpu_cores))
            .line(format!("CPU Frequency: {} MHz", report.cpu_frequency_mhz))
            .line(format!("GPU: {}", gfx.device_name))
            .line(format!("GPU Memory: {} MB", gfx.memory_mb))
            .line(format!("RAM: {} MB", report.system_memory_mb))
            .line(format!("Max Texture Size: {}", gfx.max_texture_size))
            .line(format!("Supports Instancing: {}", gfx.supports_instancing))
            .line(format!("Supports Ray Tracing: {}", gfx.supports_ray_tracing))
            .line(format!("Graphics API: {}", gfx.api))
            .line(format!("Graphics API Version: {}", gfx.api_version));
        section
    }
}

fn ping_label(ping: Option<i32>) -> String {
    ping.map_or_else(|| "-".to_string(), |ms| ms.to_string())
}

fn network_section(network: &NetworkMonitor) -> PanelSection {
    let provider = network.provider();
    let ping = network.ping_range();
    let rates = network.throughput();
    let mut section = PanelSection::new(NETWORK);
    section
        .line(format!("Current Ping: {} ms", provider.ping_ms()))
        .line(format!("Min Ping: {} ms", ping_label(ping.min())))
        .line(format!("Max Ping: {} ms", ping_label(ping.max())))
        .line(format!("Data Received: {:.2} KB/s", rates.received_kbps()))
        .line(format!("Data Sent: {:.2} KB/s", rates.sent_kbps()))
        .line(format!("Peak Received: {:.2} KB/s", rates.peak_received_kbps()))
        .line(format!("Peak Sent: {:.2} KB/s", rates.peak_sent_kbps()))
        .line(format!("Server: {}", provider.server_address()))
        .line(format!("Region: {}", provider.cloud_region()))
        .line(format!("Players: {}", provider.player_count()));

    let room = provider.current_room();
    section.line(format!("In Room: {}", room.is_some()));
    if let Some(room) = room {
        section
            .line(format!("Room Name: {}", room.name))
            .line(format!("Players in Room: {}", room.player_count));
    }

    section
        .line(format!("Sending: {}", provider.is_message_queue_running()))
        .line(format!(
            "Resent Reliable Commands: {}",
            provider.resent_reliable_commands()
        ))
        .line(format!("Client State: {}", provider.client_state()));
    section
}

fn rendering_section(
    counters: &RenderingSnapshot,
    provider: &dyn RenderingStatsProvider,
) -> PanelSection {
    let (width, height) = provider.screen_resolution();
    let mut section = PanelSection::new(RENDERING);
    section
        .line(format!("Draw Calls: {}", counters.draw_calls))
        .line(format!("Batches: {}", counters.batches))
        .line(format!("Triangles: {}", counters.triangles))
        .line(format!("Vertices: {}", counters.vertices))
        .line(format!("Screen Resolution: {width}x{height}"))
        .line(format!("Quality Level: {}", provider.quality_level()));
    section
}
