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

//! Session-wide ping bounds.

/// The lowest and highest ping observed this session.
///
/// The bounds only ever widen; nothing resets them short of creating a new
/// overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PingRange {
    min: i32,
    max: i32,
}

impl Default for PingRange {
    fn default() -> Self {
        Self {
            min: i32::MAX,
            max: i32::MIN,
        }
    }
}

impl PingRange {
    /// Creates an empty range.
    pub fn new() -> Self {
        Self::default()
    }

    /// Widens the range to include `ping_ms`.
    pub fn observe(&mut self, ping_ms: i32) {
        self.min = self.min.min(ping_ms);
        self.max = self.max.max(ping_ms);
    }

    /// The lowest ping seen, if any reading was observed.
    pub fn min(&self) -> Option<i32> {
        (self.min <= self.max).then_some(self.min)
    }

    /// The highest ping seen, if any reading was observed.
    pub fn max(&self) -> Option<i32> {
        (self.min <= self.max).then_some(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_range_has_no_bounds() {
        let range = PingRange::new();
        assert_eq!(range.min(), None);
        assert_eq!(range.max(), None);
    }

    #[test]
    fn test_single_reading_sets_both_bounds() {
        let mut range = PingRange::new();
        range.observe(42);
        assert_eq!(range.min(), Some(42));
        assert_eq!(range.max(), Some(42));
    }

    #[test]
    fn test_bounds_are_monotonic() {
        let mut range = PingRange::new();
        let readings = [80, 45, 120, 60, 30, 200, 90, 31, 199];
        let mut last_min = i32::MAX;
        let mut last_max = i32::MIN;
        for ping in readings {
            range.observe(ping);
            let (min, max) = (range.min().unwrap(), range.max().unwrap());
            assert!(min <= last_min);
            assert!(max >= last_max);
            last_min = min;
            last_max = max;
        }
        assert_eq!(range.min(), Some(30));
        assert_eq!(range.max(), Some(200));
    }
}
