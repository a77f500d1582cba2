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

//! Network statistics for hosts built with a realtime networking layer.

pub mod ping;
pub mod throughput;

pub use self::ping::PingRange;
pub use self::throughput::ThroughputTracker;

use vantage_core::{NetworkEvent, NetworkStatsProvider};

/// Samples a [`NetworkStatsProvider`] every frame.
#[derive(Debug)]
pub struct NetworkMonitor {
    provider: Box<dyn NetworkStatsProvider>,
    ping: PingRange,
    throughput: ThroughputTracker,
}

impl NetworkMonitor {
    /// Wraps `provider`, recomputing rates every `rate_window` seconds and
    /// resetting peaks every `peak_reset` seconds.
    pub fn new(provider: Box<dyn NetworkStatsProvider>, rate_window: f64, peak_reset: f64) -> Self {
        Self {
            provider,
            ping: PingRange::new(),
            throughput: ThroughputTracker::new(rate_window, peak_reset),
        }
    }

    /// Anchors the rate and peak clocks at `now`.
    pub fn start(&mut self, now: f64) {
        self.throughput
            .start(now, self.provider.bytes_received(), self.provider.bytes_sent());
    }

    /// Pulls one frame's worth of readings.
    pub fn sample(&mut self, now: f64) {
        if self.provider.is_message_queue_running() {
            self.ping.observe(self.provider.ping_ms());
        }

        let reset = self.throughput.update(
            now,
            self.provider.bytes_received(),
            self.provider.bytes_sent(),
        );
        if reset {
            log::debug!("Network peak rates reset at t={now:.2}s");
        }
    }

    /// The wrapped provider, for values read at draw time.
    pub fn provider(&self) -> &dyn NetworkStatsProvider {
        self.provider.as_ref()
    }

    /// Session-wide ping bounds.
    pub fn ping_range(&self) -> PingRange {
        self.ping
    }

    /// Rate and peak estimates.
    pub fn throughput(&self) -> &ThroughputTracker {
        &self.throughput
    }
}

/// Logs a networking lifecycle callback.
pub fn log_network_event(event: &NetworkEvent) {
    match event {
        NetworkEvent::ConnectedToServer => log::info!("Connected to master server"),
        NetworkEvent::Disconnected { reason } => {
            log::warn!("Disconnected from server. Reason: {reason}")
        }
        NetworkEvent::JoinedRoom { room } => log::info!("Joined room: {room}"),
        NetworkEvent::PlayerEnteredRoom { nickname } => log::info!("Player joined: {nickname}"),
        NetworkEvent::PlayerLeftRoom { nickname } => log::info!("Player left: {nickname}"),
    }
}
