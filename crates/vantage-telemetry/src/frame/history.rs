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

//! A bounded FIFO of interval-FPS samples with rolling statistics.

use std::collections::VecDeque;

/// Samples allocated up front; the buffer grows on demand past this.
const PREALLOCATED_SAMPLES: usize = 64;

/// The most recent interval-FPS samples, oldest first.
///
/// Holds at most `capacity` samples; pushing into a full history evicts the
/// oldest one. All retained samples are weighted equally.
#[derive(Debug, Clone)]
pub struct FpsHistory {
    samples: VecDeque<f32>,
    capacity: usize,
}

impl FpsHistory {
    /// Creates an empty history holding at most `capacity` samples.
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity.min(PREALLOCATED_SAMPLES)),
            capacity,
        }
    }

    /// Appends a sample, returning the evicted one if the history was full.
    pub fn push(&mut self, fps: f32) -> Option<f32> {
        self.samples.push_back(fps);
        if self.samples.len() > self.capacity {
            self.samples.pop_front()
        } else {
            None
        }
    }

    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no sample has been retained yet.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum number of retained samples.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates over retained samples, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().copied()
    }

    /// Arithmetic mean of the retained samples, or 0 when empty.
    pub fn average(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f32>() / self.samples.len() as f32
    }

    /// Smallest retained sample, or 0 when empty.
    pub fn min(&self) -> f32 {
        self.samples.iter().copied().reduce(f32::min).unwrap_or(0.0)
    }

    /// Largest retained sample, or 0 when empty.
    pub fn max(&self) -> f32 {
        self.samples.iter().copied().reduce(f32::max).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_history_statistics_are_zero() {
        let history = FpsHistory::new(60);
        assert!(history.is_empty());
        assert_eq!(history.average(), 0.0);
        assert_eq!(history.min(), 0.0);
        assert_eq!(history.max(), 0.0);
    }

    #[test]
    fn test_statistics_over_retained_samples() {
        let mut history = FpsHistory::new(60);
        for fps in [30.0, 60.0, 90.0, 45.0] {
            history.push(fps);
        }
        assert_relative_eq!(history.average(), 56.25);
        assert_eq!(history.min(), 30.0);
        assert_eq!(history.max(), 90.0);
    }

    #[test]
    fn test_sixty_one_pushes_keep_last_sixty_in_order() {
        let mut history = FpsHistory::new(60);
        for i in 0..61 {
            history.push(i as f32);
        }
        assert_eq!(history.len(), 60);
        let expected: Vec<f32> = (1..61).map(|i| i as f32).collect();
        assert_eq!(history.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_full_history_evicts_exactly_the_oldest() {
        let mut history = FpsHistory::new(3);
        assert_eq!(history.push(1.0), None);
        assert_eq!(history.push(2.0), None);
        assert_eq!(history.push(3.0), None);
        assert_eq!(history.push(4.0), Some(1.0));
        assert_eq!(history.push(5.0), Some(2.0));
        assert_eq!(history.iter().collect::<Vec<_>>(), vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_length_never_exceeds_capacity() {
        let mut history = FpsHistory::new(7);
        for i in 0..500 {
            history.push((i % 13) as f32);
            assert!(history.len() <= history.capacity());
        }
    }

    #[test]
    fn test_huge_capacity_does_not_preallocate() {
        let mut history = FpsHistory::new(usize::MAX);
        assert_eq!(history.capacity(), usize::MAX);
        assert_eq!(history.push(60.0), None);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_statistics_ignore_evicted_samples() {
        let mut history = FpsHistory::new(2);
        history.push(1000.0);
        history.push(10.0);
        history.push(20.0);
        assert_eq!(history.max(), 20.0);
        assert_relative_eq!(history.average(), 15.0);
    }
}
