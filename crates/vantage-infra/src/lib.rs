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

//! Concrete implementations of the overlay's host contracts.
//!
//! Everything here talks to a real platform API (`sysinfo`, `winit`, `egui`,
//! the global allocator) so that `vantage-core` and `vantage-telemetry` stay
//! host-agnostic.

#![warn(missing_docs)]

pub mod allocator;
pub mod network;
pub mod platform;
pub mod telemetry;
#[cfg(feature = "ui")]
pub mod ui;

pub use allocator::TrackingAllocator;
pub use network::NetworkCounters;
#[cfg(feature = "platform")]
pub use platform::HotkeyListener;
pub use platform::SysinfoSystemInfo;
pub use telemetry::ProcessMemoryProvider;
#[cfg(feature = "ui")]
pub use ui::show_overlay_panel;
