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

//! Provider traits and snapshot types for every section of the overlay.
//!
//! A "provider" is a read-only window into host state: the engine's profiler,
//! the platform layer, or a networking SDK. Providers are polled by the overlay
//! once per frame (or once per draw for static system data) and are treated as
//! always available. An accessor that cannot produce a value in the current
//! build returns `None`, and the overlay keeps whatever it saw last.

pub mod memory;
pub mod network;
pub mod rendering;
pub mod system;

pub use self::memory::{bytes_to_mb, MemorySnapshot, MemoryStatsProvider};
pub use self::network::{ClientState, NetworkEvent, NetworkStatsProvider, RoomInfo};
pub use self::rendering::{RenderingSnapshot, RenderingStatsProvider};
pub use self::system::{GraphicsCapabilities, SystemInfoProvider, SystemReport};
