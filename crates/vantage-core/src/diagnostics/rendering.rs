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

//! Rendering counters, available only in privileged (editor/debug) hosts.

use std::fmt::Debug;

/// Renderer counters for the most recent frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderingSnapshot {
    /// The number of draw calls issued.
    pub draw_calls: u32,
    /// The number of batches after dynamic/static batching.
    pub batches: u32,
    /// The number of triangles submitted.
    pub triangles: u32,
    /// The number of vertices submitted.
    pub vertices: u32,
}

/// Read-only access to the renderer's statistics.
///
/// Hosts that do not expose renderer internals simply do not register one,
/// and the overlay omits its Rendering section.
pub trait RenderingStatsProvider: Debug {
    /// Returns the counters for the last rendered frame.
    fn counters(&self) -> RenderingSnapshot;

    /// Returns the current back-buffer size as `(width, height)`.
    fn screen_resolution(&self) -> (u32, u32);

    /// Returns the name of the active quality preset.
    fn quality_level(&self) -> String;
}
