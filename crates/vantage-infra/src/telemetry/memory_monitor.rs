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

//! Process memory provider.
//!
//! Combines the heap counters maintained by [`TrackingAllocator`] with the
//! process's resident memory as reported by the operating system.
//!
//! [`TrackingAllocator`]: crate::allocator::TrackingAllocator

use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};
use vantage_core::memory::allocation_stats;
use vantage_core::MemoryStatsProvider;

/// How long one resident-memory reading is reused, so the reserved and unused
/// figures of a frame come from the same reading.
const RESIDENT_READING_TTL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy)]
struct ResidentReading {
    taken_at: Instant,
    bytes: Option<u64>,
}

/// Reports process memory to the overlay.
///
/// * allocated: bytes live in the tracking allocator (unavailable when no
///   tracking allocator is installed),
/// * reserved: the process's resident set size,
/// * unused reserved: the difference between the two,
/// * graphics driver: whatever the renderer last reported through
///   [`set_graphics_driver_bytes`](Self::set_graphics_driver_bytes).
#[derive(Debug)]
pub struct ProcessMemoryProvider {
    system: Mutex<System>,
    pid: Option<Pid>,
    last_resident: Mutex<Option<ResidentReading>>,
    graphics_driver_bytes: Mutex<Option<u64>>,
}

impl ProcessMemoryProvider {
    /// Creates a provider for the current process.
    pub fn new() -> Self {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(err) => {
                log::warn!("Cannot identify current process, resident memory unavailable: {err}");
                None
            }
        };
        Self {
            system: Mutex::new(System::new()),
            pid,
            last_resident: Mutex::new(None),
            graphics_driver_bytes: Mutex::new(None),
        }
    }

    /// Records the graphics driver's current allocation total.
    pub fn set_graphics_driver_bytes(&self, bytes: u64) {
        *self
            .graphics_driver_bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(bytes);
    }

    fn resident_bytes(&self) -> Option<u64> {
        let mut last = self
            .last_resident
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();
        if let Some(reading) = *last {
            if now.duration_since(reading.taken_at) < RESIDENT_READING_TTL {
                return reading.bytes;
            }
        }
        let bytes = self.read_resident_bytes();
        *last = Some(ResidentReading {
            taken_at: now,
            bytes,
        });
        bytes
    }

    fn read_resident_bytes(&self) -> Option<u64> {
        let pid = self.pid?;
        let mut system = self.system.lock().unwrap_or_else(PoisonError::into_inner);
        system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );
        system.process(pid).map(|process| process.memory())
    }

    fn tracked_bytes(&self) -> Option<u64> {
        let stats = allocation_stats();
        // No allocation was ever counted: the tracking allocator is not installed.
        (stats.total_allocations > 0).then_some(stats.current_allocated_bytes as u64)
    }
}

impl Default for ProcessMemoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStatsProvider for ProcessMemoryProvider {
    fn total_allocated_bytes(&self) -> Option<u64> {
        self.tracked_bytes()
    }

    fn total_reserved_bytes(&self) -> Option<u64> {
        self.resident_bytes()
    }

    fn total_unused_reserved_bytes(&self) -> Option<u64> {
        let reserved = self.resident_bytes()?;
        let allocated = self.tracked_bytes()?;
        Some(reserved.saturating_sub(allocated))
    }

    fn graphics_driver_bytes(&self) -> Option<u64> {
        *self
            .graphics_driver_bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resident_memory_is_reported() {
        let provider = ProcessMemoryProvider::new();
        let reserved = provider.total_reserved_bytes();
        assert!(reserved.is_some_and(|bytes| bytes > 0));
    }

    #[test]
    fn test_reserved_and_unused_share_one_reading() {
        let provider = ProcessMemoryProvider::new();
        let start = Instant::now();
        let reserved = provider.total_reserved_bytes();
        let first = (*provider.last_resident.lock().unwrap()).unwrap();

        provider.total_unused_reserved_bytes();
        let second = (*provider.last_resident.lock().unwrap()).unwrap();

        if start.elapsed() < RESIDENT_READING_TTL {
            assert_eq!(second.taken_at, first.taken_at);
            assert_eq!(second.bytes, reserved);
        }
    }

    #[test]
    fn test_graphics_driver_bytes_unset_until_reported() {
        let provider = ProcessMemoryProvider::new();
        assert_eq!(provider.graphics_driver_bytes(), None);
        provider.set_graphics_driver_bytes(128 * 1024 * 1024);
        assert_eq!(provider.graphics_driver_bytes(), Some(128 * 1024 * 1024));
    }

    #[test]
    fn test_managed_heap_is_unavailable() {
        assert_eq!(ProcessMemoryProvider::new().managed_heap_bytes(), None);
    }
}
