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

//! Static platform and device capabilities shown in the System section.

/// Graphics adapter details, usually supplied by the renderer once its device is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphicsCapabilities {
    /// The adapter's marketing name.
    pub device_name: String,
    /// Dedicated video memory in megabytes.
    pub memory_mb: u64,
    /// The largest supported 2D texture dimension.
    pub max_texture_size: u32,
    /// Whether GPU instancing is supported.
    pub supports_instancing: bool,
    /// Whether hardware ray tracing is supported.
    pub supports_ray_tracing: bool,
    /// The graphics API in use (e.g. "Vulkan").
    pub api: String,
    /// The API or driver version string.
    pub api_version: String,
}

impl Default for GraphicsCapabilities {
    fn default() -> Self {
        Self {
            device_name: "Unknown".to_string(),
            memory_mb: 0,
            max_texture_size: 0,
            supports_instancing: false,
            supports_ray_tracing: false,
            api: "Unknown".to_string(),
            api_version: "Unknown".to_string(),
        }
    }
}

/// A snapshot of host and device capabilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemReport {
    /// Operating system name and version.
    pub operating_system: String,
    /// Device model or host name.
    pub device_model: String,
    /// CPU brand string.
    pub cpu_name: String,
    /// Number of logical CPU cores.
    pub cpu_cores: usize,
    /// CPU frequency in MHz.
    pub cpu_frequency_mhz: u64,
    /// Installed system memory in megabytes.
    pub system_memory_mb: u64,
    /// Graphics adapter details.
    pub graphics: GraphicsCapabilities,
}

/// Read-only access to the host's platform layer.
///
/// The overlay calls this every time it draws, so implementations should not
/// cache values that can change at runtime.
pub trait SystemInfoProvider: std::fmt::Debug {
    /// Returns a fresh capability report.
    fn system_report(&self) -> SystemReport;
}
