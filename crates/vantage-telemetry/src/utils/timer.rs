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

//! A host-time driven repeating timer.
//!
//! The overlay does not own a clock; it is handed the host's current time every
//! frame. `PeriodicTimer` turns that into "how many periods ended since the last
//! poll", so frame cadence never affects when a period boundary is crossed.

/// Fires once per `period` seconds of host time, starting one period after `start`.
#[derive(Debug, Clone)]
pub struct PeriodicTimer {
    period: f64,
    next_due: Option<f64>,
}

impl PeriodicTimer {
    /// Creates a stopped timer. `period` must be positive.
    pub fn new(period: f64) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// Starts (or restarts) the timer; the first boundary is `now + period`.
    pub fn start(&mut self, now: f64) {
        self.next_due = Some(now + self.period);
    }

    /// Whether `start` has been called.
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns how many period boundaries lie in `(last poll, now]`.
    ///
    /// A stopped timer never fires.
    pub fn poll(&mut self, now: f64) -> u32 {
        let Some(next_due) = self.next_due else {
            return 0;
        };
        if now < next_due {
            return 0;
        }
        let elapsed_periods = ((now - next_due) / self.period).floor() as u32 + 1;
        self.next_due = Some(next_due + elapsed_periods as f64 * self.period);
        elapsed_periods
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_timer_never_fires() {
        let mut timer = PeriodicTimer::new(5.0);
        assert!(!timer.is_running());
        assert_eq!(timer.poll(100.0), 0);
    }

    #[test]
    fn test_fires_on_each_boundary() {
        let mut timer = PeriodicTimer::new(5.0);
        timer.start(0.0);
        assert_eq!(timer.poll(4.9), 0);
        assert_eq!(timer.poll(5.0), 1);
        assert_eq!(timer.poll(5.1), 0);
        assert_eq!(timer.poll(9.99), 0);
        assert_eq!(timer.poll(10.0), 1);
    }

    #[test]
    fn test_long_gap_reports_every_missed_boundary() {
        let mut timer = PeriodicTimer::new(5.0);
        timer.start(2.0);
        assert_eq!(timer.poll(18.0), 3);
        // Boundaries stay on the original grid (7, 12, 17, 22, ...).
        assert_eq!(timer.poll(21.9), 0);
        assert_eq!(timer.poll(22.0), 1);
    }
}
