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

//! A `GlobalAlloc` wrapper that feeds the heap counters shown in the Memory section.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::Ordering;
use vantage_core::memory::{CURRENTLY_ALLOCATED_BYTES, TOTAL_ALLOCATIONS};

/// Wraps an allocator and updates the counters in `vantage_core::memory`.
///
/// Register it as the global allocator to give [`ProcessMemoryProvider`]
/// an accurate "Allocated" figure:
///
/// ```rust,ignore
/// use vantage_infra::TrackingAllocator;
///
/// #[global_allocator]
/// static GLOBAL: TrackingAllocator = TrackingAllocator::new(std::alloc::System);
/// ```
///
/// [`ProcessMemoryProvider`]: crate::telemetry::ProcessMemoryProvider
#[derive(Debug, Default, Clone, Copy)]
pub struct TrackingAllocator<A = System> {
    inner: A,
}

impl<A> TrackingAllocator<A> {
    /// Creates a tracking allocator around `inner`.
    pub const fn new(inner: A) -> Self {
        Self { inner }
    }
}

/// Adds `size` to the live byte count. Returns `false` on overflow.
fn record_growth(size: usize) -> bool {
    let result = CURRENTLY_ALLOCATED_BYTES.fetch_update(
        Ordering::Relaxed,
        Ordering::Relaxed,
        |current| current.checked_add(size),
    );
    if result.is_err() {
        log::error!("Allocation counter overflowed! Size: {size}");
    }
    result.is_ok()
}

/// Removes `size` from the live byte count. Returns `false` on underflow.
fn record_release(size: usize) -> bool {
    let result = CURRENTLY_ALLOCATED_BYTES.fetch_update(
        Ordering::Relaxed,
        Ordering::Relaxed,
        |current| current.checked_sub(size),
    );
    if result.is_err() {
        log::error!("Allocation counter underflowed! Size: {size}");
    }
    result.is_ok()
}

fn record_alloc(size: usize) {
    if record_growth(size) {
        TOTAL_ALLOCATIONS.fetch_add(1, Ordering::Relaxed);
    }
}

unsafe impl<A: GlobalAlloc> GlobalAlloc for TrackingAllocator<A> {
    /// # Safety
    ///
    /// Same contract as [`GlobalAlloc::alloc`].
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = self.inner.alloc(layout);
        if !ptr.is_null() {
            record_alloc(layout.size());
        }
        ptr
    }

    /// # Safety
    ///
    /// Same contract as [`GlobalAlloc::dealloc`].
    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        record_release(layout.size());
        self.inner.dealloc(ptr, layout);
    }

    /// # Safety
    ///
    /// Same contract as [`GlobalAlloc::alloc_zeroed`].
    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = self.inner.alloc_zeroed(layout);
        if !ptr.is_null() {
            record_alloc(layout.size());
        }
        ptr
    }

    /// # Safety
    ///
    /// Same contract as [`GlobalAlloc::realloc`].
    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = self.inner.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            let old_size = layout.size();
            if new_size > old_size {
                record_growth(new_size - old_size);
            } else if new_size < old_size {
                record_release(old_size - new_size);
            }
        }
        new_ptr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, PoisonError};
    use vantage_core::memory::allocation_stats;

    // The tracker is exercised directly rather than installed globally, so the
    // counters only move when these tests call it.
    static TRACKER: TrackingAllocator = TrackingAllocator::new(System);
    static COUNTERS: Mutex<()> = Mutex::new(());

    fn lock_counters() -> std::sync::MutexGuard<'static, ()> {
        COUNTERS.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[test]
    fn test_alloc_and_dealloc_update_counters() {
        let _guard = lock_counters();
        let layout = Layout::from_size_align(4096, 8).unwrap();
        let before = allocation_stats();

        let ptr = unsafe { TRACKER.alloc(layout) };
        assert!(!ptr.is_null());
        let during = allocation_stats();
        assert_eq!(during.total_allocations, before.total_allocations + 1);
        assert_eq!(
            during.current_allocated_bytes,
            before.current_allocated_bytes + 4096
        );

        unsafe { TRACKER.dealloc(ptr, layout) };
        let after = allocation_stats();
        assert_eq!(after.current_allocated_bytes, before.current_allocated_bytes);
    }

    #[test]
    fn test_realloc_tracks_growth_and_shrink() {
        let _guard = lock_counters();
        let layout = Layout::from_size_align(64, 8).unwrap();
        let ptr = unsafe { TRACKER.alloc(layout) };
        let base = allocation_stats();

        let grown = unsafe { TRACKER.realloc(ptr, layout, 1024) };
        assert!(!grown.is_null());
        let after_grow = allocation_stats();
        assert_eq!(
            after_grow.current_allocated_bytes,
            base.current_allocated_bytes + 960
        );
        assert_eq!(after_grow.total_allocations, base.total_allocations);

        let grown_layout = Layout::from_size_align(1024, 8).unwrap();
        let shrunk = unsafe { TRACKER.realloc(grown, grown_layout, 256) };
        assert!(!shrunk.is_null());
        assert_eq!(
            allocation_stats().current_allocated_bytes,
            base.current_allocated_bytes + 192
        );

        let shrunk_layout = Layout::from_size_align(256, 8).unwrap();
        unsafe { TRACKER.dealloc(shrunk, shrunk_layout) };
    }

    #[test]
    fn test_underflow_is_rejected_and_leaves_counter_untouched() {
        let _guard = lock_counters();
        let before = allocation_stats().current_allocated_bytes;
        assert!(!record_release(usize::MAX));
        assert_eq!(allocation_stats().current_allocated_bytes, before);
    }
}
