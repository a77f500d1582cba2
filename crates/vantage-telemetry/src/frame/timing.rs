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

//! Smoothed frame time and fixed-interval FPS.

/// Tracks per-frame timing and produces one FPS sample per interval.
///
/// Two views are kept side by side: an exponential moving average of the frame
/// delta, which reacts within a few frames, and an interval FPS computed as
/// `frames / elapsed` once per `interval` seconds.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    interval: f32,
    smoothing: f32,
    smoothed_delta: f32,
    accum: f32,
    frames: u32,
    time_left: f32,
    fps: f32,
}

impl FrameTiming {
    /// Creates a tracker emitting a sample every `interval` seconds.
    pub fn new(interval: f32, smoothing: f32) -> Self {
        Self {
            interval,
            smoothing,
            smoothed_delta: 0.0,
            accum: 0.0,
            frames: 0,
            time_left: 0.0,
            fps: 0.0,
        }
    }

    /// Feeds one frame's unscaled delta, in seconds.
    ///
    /// Returns the new interval FPS when this frame closed an interval. The
    /// countdown starts expired, so the first frame always yields a sample.
    pub fn advance(&mut self, raw_delta: f32) -> Option<f32> {
        self.smoothed_delta += (raw_delta - self.smoothed_delta) * self.smoothing;
        self.accum += raw_delta;
        self.frames += 1;

        let mut sample = None;
        // A zero accumulator means no time has passed yet; wait for a real delta.
        if self.time_left <= 0.0 && self.accum > 0.0 {
            self.fps = self.frames as f32 / self.accum;
            self.time_left = self.interval;
            self.accum = 0.0;
            self.frames = 0;
            sample = Some(self.fps);
        }

        self.time_left -= raw_delta;
        sample
    }

    /// The most recent interval FPS.
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// The smoothed frame delta, in seconds.
    pub fn smoothed_delta(&self) -> f32 {
        self.smoothed_delta
    }

    /// The smoothed frame delta, in milliseconds.
    pub fn smoothed_frame_ms(&self) -> f32 {
        self.smoothed_delta * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_frame_produces_a_sample() {
        let mut timing = FrameTiming::new(0.5, 0.1);
        let sample = timing.advance(0.02).unwrap();
        assert_relative_eq!(sample, 50.0, epsilon = 1e-3);
        assert_relative_eq!(timing.fps(), 50.0, epsilon = 1e-3);
    }

    #[test]
    fn test_smoothed_delta_is_exponential_moving_average() {
        let mut timing = FrameTiming::new(0.5, 0.1);
        timing.advance(0.1);
        assert_relative_eq!(timing.smoothed_delta(), 0.01, epsilon = 1e-6);
        timing.advance(0.1);
        assert_relative_eq!(timing.smoothed_delta(), 0.019, epsilon = 1e-6);
        assert_relative_eq!(timing.smoothed_frame_ms(), 19.0, epsilon = 1e-3);
    }

    #[test]
    fn test_interval_fps_over_three_frames() {
        let mut timing = FrameTiming::new(0.5, 0.1);
        // Start-up sample; leaves 0.03 s on the countdown.
        assert!(timing.advance(0.47).is_some());

        assert_eq!(timing.advance(0.016), None);
        assert_eq!(timing.advance(0.017), None);
        let sample = timing.advance(0.016).unwrap();

        assert_relative_eq!(sample, 3.0 / 0.049, epsilon = 1e-2);
        assert_relative_eq!(sample, 61.2, epsilon = 0.05);
    }

    #[test]
    fn test_samples_once_per_interval_at_steady_rate() {
        let mut timing = FrameTiming::new(0.5, 0.1);
        let samples = (0..300).filter_map(|_| timing.advance(0.01)).count();
        // Start-up sample plus one per 0.5 s over 3 s of frames.
        assert!((6..=7).contains(&samples), "got {samples} samples");
        assert_relative_eq!(timing.fps(), 100.0, epsilon = 0.5);
    }

    #[test]
    fn test_zero_delta_frames_do_not_divide_by_zero() {
        let mut timing = FrameTiming::new(0.5, 0.1);
        assert_eq!(timing.advance(0.0), None);
        let sample = timing.advance(0.05).unwrap();
        assert_relative_eq!(sample, 40.0, epsilon = 1e-3);
        assert!(timing.fps().is_finite());
    }
}
