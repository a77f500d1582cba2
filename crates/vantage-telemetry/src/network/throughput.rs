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

//! Data-rate estimation and peak tracking.

use crate::utils::PeriodicTimer;

const BYTES_PER_KB: f64 = 1024.0;

/// Estimates received/sent KB/s and tracks their recent peaks.
///
/// Two independent clocks drive it: rates are recomputed whenever at least
/// `rate_window` seconds have passed since the last recomputation, and peaks
/// are reset to zero on a fixed `peak_reset` grid anchored at `start`.
#[derive(Debug, Clone)]
pub struct ThroughputTracker {
    rate_window: f64,
    last_check: Option<f64>,
    last_received: u64,
    last_sent: u64,
    received_kbps: f32,
    sent_kbps: f32,
    peak_received_kbps: f32,
    peak_sent_kbps: f32,
    peak_reset: PeriodicTimer,
}

impl ThroughputTracker {
    /// Creates a tracker that has not started yet.
    pub fn new(rate_window: f64, peak_reset: f64) -> Self {
        Self {
            rate_window,
            last_check: None,
            last_received: 0,
            last_sent: 0,
            received_kbps: 0.0,
            sent_kbps: 0.0,
            peak_received_kbps: 0.0,
            peak_sent_kbps: 0.0,
            peak_reset: PeriodicTimer::new(peak_reset),
        }
    }

    /// Anchors both clocks at `now` and records the byte counters as the baseline.
    pub fn start(&mut self, now: f64, bytes_received: u64, bytes_sent: u64) {
        self.last_check = Some(now);
        self.last_received = bytes_received;
        self.last_sent = bytes_sent;
        self.peak_reset.start(now);
    }

    /// Whether `start` has been called.
    pub fn is_started(&self) -> bool {
        self.last_check.is_some()
    }

    /// Advances both clocks to `now` given the current cumulative byte counters.
    ///
    /// Returns `true` if the peaks were reset during this call.
    pub fn update(&mut self, now: f64, bytes_received: u64, bytes_sent: u64) -> bool {
        let Some(last_check) = self.last_check else {
            self.start(now, bytes_received, bytes_sent);
            return false;
        };

        let elapsed = now - last_check;
        if elapsed >= self.rate_window {
            // Counters that went backwards (client recreated) read as zero traffic.
            let received = bytes_received.saturating_sub(self.last_received);
            let sent = bytes_sent.saturating_sub(self.last_sent);
            self.received_kbps = (received as f64 / BYTES_PER_KB / elapsed) as f32;
            self.sent_kbps = (sent as f64 / BYTES_PER_KB / elapsed) as f32;

            self.peak_received_kbps = self.peak_received_kbps.max(self.received_kbps);
            self.peak_sent_kbps = self.peak_sent_kbps.max(self.sent_kbps);

            self.last_check = Some(now);
            self.last_received = bytes_received;
            self.last_sent = bytes_sent;
        }

        if self.peak_reset.poll(now) > 0 {
            self.reset_peaks();
            true
        } else {
            false
        }
    }

    /// Clears both peak trackers.
    pub fn reset_peaks(&mut self) {
        self.peak_received_kbps = 0.0;
        self.peak_sent_kbps = 0.0;
    }

    /// Latest received rate, in KB/s.
    pub fn received_kbps(&self) -> f32 {
        self.received_kbps
    }

    /// Latest sent rate, in KB/s.
    pub fn sent_kbps(&self) -> f32 {
        self.sent_kbps
    }

    /// Highest received rate since the last peak reset, in KB/s.
    pub fn peak_received_kbps(&self) -> f32 {
        self.peak_received_kbps
    }

    /// Highest sent rate since the last peak reset, in KB/s.
    pub fn peak_sent_kbps(&self) -> f32 {
        self.peak_sent_kbps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rates_recomputed_once_per_window() {
        let mut tracker = ThroughputTracker::new(1.0, 5.0);
        tracker.start(0.0, 0, 0);

        tracker.update(0.5, 4096, 1024);
        assert_eq!(tracker.received_kbps(), 0.0);

        tracker.update(1.0, 4096, 1024);
        assert_relative_eq!(tracker.received_kbps(), 4.0);
        assert_relative_eq!(tracker.sent_kbps(), 1.0);

        // Rate is measured over the actual elapsed time, not the nominal window.
        tracker.update(2.5, 4096 + 3072, 1024);
        assert_relative_eq!(tracker.received_kbps(), 2.0);
        assert_eq!(tracker.sent_kbps(), 0.0);
    }

    #[test]
    fn test_peaks_follow_highest_rate() {
        let mut tracker = ThroughputTracker::new(1.0, 5.0);
        tracker.start(0.0, 0, 0);
        tracker.update(1.0, 8192, 0);
        tracker.update(2.0, 9216, 0);
        assert_relative_eq!(tracker.received_kbps(), 1.0);
        assert_relative_eq!(tracker.peak_received_kbps(), 8.0);
    }

    #[test]
    fn test_peaks_reset_on_period_boundary() {
        let mut tracker = ThroughputTracker::new(1.0, 5.0);
        tracker.start(0.0, 0, 0);
        tracker.update(4.0, 4096, 4096);
        assert!(tracker.peak_received_kbps() > 0.0);

        assert!(tracker.update(5.0, 8192, 8192));
        assert_eq!(tracker.peak_received_kbps(), 0.0);
        assert_eq!(tracker.peak_sent_kbps(), 0.0);
        // Current rates are not touched by a peak reset.
        assert_relative_eq!(tracker.received_kbps(), 4.0);
    }

    #[test]
    fn test_counter_rollback_reads_as_zero() {
        let mut tracker = ThroughputTracker::new(1.0, 5.0);
        tracker.start(0.0, 10_000, 10_000);
        tracker.update(1.0, 100, 100);
        assert_eq!(tracker.received_kbps(), 0.0);
        assert_eq!(tracker.sent_kbps(), 0.0);
    }

    #[test]
    fn test_update_before_start_anchors_clocks() {
        let mut tracker = ThroughputTracker::new(1.0, 5.0);
        assert!(!tracker.is_started());
        assert!(!tracker.update(3.0, 500, 500));
        assert!(tracker.is_started());
        tracker.update(4.0, 500 + 2048, 500);
        assert_relative_eq!(tracker.received_kbps(), 2.0);
    }
}
