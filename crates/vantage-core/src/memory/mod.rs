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

//! Process-wide heap allocation counters.
//!
//! These counters form a contract: a registered global allocator (see
//! `vantage_infra::allocator::TrackingAllocator`) increments them, and any
//! provider can read them without locking to report heap usage to the overlay.
//! When no tracking allocator is installed every counter stays at zero.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Bytes currently allocated through the tracking allocator.
pub static CURRENTLY_ALLOCATED_BYTES: AtomicUsize = AtomicUsize::new(0);

/// Number of allocation calls.
pub static TOTAL_ALLOCATIONS: AtomicU64 = AtomicU64::new(0);

/// A point-in-time copy of the allocation counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocationStats {
    /// Bytes currently in use.
    pub current_allocated_bytes: usize,
    /// Allocation calls so far.
    pub total_allocations: u64,
}

/// Reads every counter with relaxed ordering.
///
/// The counters are read one after another, so under concurrent allocation the
/// values may be off by a few in-flight operations.
pub fn allocation_stats() -> AllocationStats {
    AllocationStats {
        current_allocated_bytes: CURRENTLY_ALLOCATED_BYTES.load(Ordering::Relaxed),
        total_allocations: TOTAL_ALLOCATIONS.load(Ordering::Relaxed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_reflects_counters() {
        let before = allocation_stats();
        TOTAL_ALLOCATIONS.fetch_add(3, Ordering::Relaxed);
        let after = allocation_stats();
        assert!(after.total_allocations >= before.total_allocations + 3);
    }
}
