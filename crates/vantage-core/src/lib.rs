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

//! Foundational contracts for the Vantage diagnostics overlay.
//!
//! This crate defines the "what" of diagnostics: the read-only provider traits a
//! host implements to expose its counters, the snapshot types those counters are
//! collected into, and the hotkey identifiers used to toggle the overlay.
//! `vantage-telemetry` owns the sampling logic, and `vantage-infra` provides
//! concrete providers backed by real platform APIs.

#![warn(missing_docs)]

pub mod diagnostics;
pub mod input;
pub mod memory;

pub use diagnostics::{
    ClientState, GraphicsCapabilities, MemorySnapshot, MemoryStatsProvider, NetworkEvent,
    NetworkStatsProvider, RenderingSnapshot, RenderingStatsProvider, RoomInfo, SystemInfoProvider,
    SystemReport,
};
pub use input::Hotkey;
