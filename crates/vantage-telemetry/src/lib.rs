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

//! Sampling, rolling statistics and presentation for the diagnostics overlay.
//!
//! [`DiagnosticsOverlay`] is the entry point: a host adapter drives it once per
//! frame and draws the [`OverlayPanel`] it returns with whatever immediate-mode
//! UI the host uses.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod frame;
pub mod network;
pub mod overlay;
pub mod presenter;
pub mod sampler;
pub mod utils;
pub mod visibility;

pub use config::{OverlayConfig, WindowRect, MAX_HISTORY_CAPACITY};
pub use error::{OverlayError, OverlayResult};
pub use overlay::DiagnosticsOverlay;
pub use presenter::{OverlayPanel, PanelSection};
pub use visibility::Visibility;
