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

//! sysinfo-based implementation of the SystemInfoProvider trait.

use std::sync::{Mutex, PoisonError};
use sysinfo::System;
use vantage_core::diagnostics::bytes_to_mb;
use vantage_core::{GraphicsCapabilities, SystemInfoProvider, SystemReport};

const UNKNOWN: &str = "Unknown";

/// A system information provider that uses the `sysinfo` crate.
///
/// CPU and memory data are refreshed on every report. GPU details are not
/// visible to `sysinfo`; they come from the renderer via
/// [`set_graphics`](Self::set_graphics).
#[derive(Debug)]
pub struct SysinfoSystemInfo {
    system: Mutex<System>,
    graphics: Mutex<GraphicsCapabilities>,
}

impl SysinfoSystemInfo {
    /// Creates a provider with the given graphics adapter details.
    pub fn new(graphics: GraphicsCapabilities) -> Self {
        let mut system = System::new_all();
        system.refresh_all();
        Self {
            system: Mutex::new(system),
            graphics: Mutex::new(graphics),
        }
    }

    /// Replaces the graphics adapter details, e.g. after a device is recreated.
    pub fn set_graphics(&self, graphics: GraphicsCapabilities) {
        *self.graphics.lock().unwrap_or_else(PoisonError::into_inner) = graphics;
    }
}

impl Default for SysinfoSystemInfo {
    fn default() -> Self {
        Self::new(GraphicsCapabilities::default())
    }
}

impl SystemInfoProvider for SysinfoSystemInfo {
    fn system_report(&self) -> SystemReport {
        let mut system = self.system.lock().unwrap_or_else(PoisonError::into_inner);
        system.refresh_memory();
        system.refresh_cpu_all();

        let cpus = system.cpus();
        let (cpu_name, cpu_frequency_mhz) = cpus
            .first()
            .map(|cpu| (cpu.brand().trim().to_string(), cpu.frequency()))
            .unwrap_or_else(|| (UNKNOWN.to_string(), 0));

        SystemReport {
            operating_system: System::long_os_version().unwrap_or_else(|| UNKNOWN.to_string()),
            device_model: System::host_name().unwrap_or_else(|| UNKNOWN.to_string()),
            cpu_name,
            cpu_cores: cpus.len(),
            cpu_frequency_mhz,
            system_memory_mb: bytes_to_mb(system.total_memory()),
            graphics: self
                .graphics
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_describes_host() {
        let provider = SysinfoSystemInfo::default();
        let report = provider.system_report();
        assert!(report.cpu_cores > 0);
        assert!(report.system_memory_mb > 0);
        assert_eq!(report.graphics, GraphicsCapabilities::default());
    }

    #[test]
    fn test_graphics_details_come_from_renderer() {
        let provider = SysinfoSystemInfo::default();
        provider.set_graphics(GraphicsCapabilities {
            device_name: "Integrated GPU".to_string(),
            api: "Metal".to_string(),
            supports_instancing: true,
            ..Default::default()
        });

        let report = provider.system_report();
        assert_eq!(report.graphics.device_name, "Integrated GPU");
        assert_eq!(report.graphics.api, "Metal");
        assert!(report.graphics.supports_instancing);
    }
}
