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

//! Memory accessors and the per-frame memory snapshot.

use std::fmt::Debug;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Converts a byte count to whole megabytes, truncating.
pub fn bytes_to_mb(bytes: u64) -> u64 {
    bytes / BYTES_PER_MB
}

/// Read-only access to the host's memory counters.
///
/// Every accessor returns a byte count, or `None` when the host cannot report
/// that counter in the current build configuration.
pub trait MemoryStatsProvider: Debug {
    /// Total bytes currently allocated by the host allocator.
    fn total_allocated_bytes(&self) -> Option<u64>;
    /// Total bytes reserved from the operating system.
    fn total_reserved_bytes(&self) -> Option<u64>;
    /// Bytes reserved from the operating system but not currently handed out.
    fn total_unused_reserved_bytes(&self) -> Option<u64>;
    /// Bytes used by a managed (garbage-collected or scripting) heap, if any.
    fn managed_heap_bytes(&self) -> Option<u64> {
        None
    }
    /// Bytes allocated by the graphics driver (textures, buffers).
    fn graphics_driver_bytes(&self) -> Option<u64> {
        None
    }
}

/// Memory usage in megabytes, refreshed every frame. No history is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemorySnapshot {
    /// Memory currently allocated, in MB.
    pub allocated_mb: u64,
    /// Memory reserved from the OS, in MB.
    pub reserved_mb: u64,
    /// Reserved memory that is not in use, in MB.
    pub unused_reserved_mb: u64,
    /// Managed heap usage, in MB.
    pub managed_heap_mb: u64,
    /// Graphics driver allocations, in MB.
    pub graphics_driver_mb: u64,
}

impl MemorySnapshot {
    /// Pulls fresh values from `provider`.
    ///
    /// Counters the provider cannot report keep their previous value.
    pub fn refresh(&mut self, provider: &dyn MemoryStatsProvider) {
        fn apply(slot: &mut u64, bytes: Option<u64>) {
            if let Some(bytes) = bytes {
                *slot = bytes_to_mb(bytes);
            }
        }

        apply(&mut self.allocated_mb, provider.total_allocated_bytes());
        apply(&mut self.reserved_mb, provider.total_reserved_bytes());
        apply(
            &mut self.unused_reserved_mb,
            provider.total_unused_reserved_bytes(),
        );
        apply(&mut self.managed_heap_mb, provider.managed_heap_bytes());
        apply(&mut self.graphics_driver_mb, provider.graphics_driver_bytes());
    }
}
