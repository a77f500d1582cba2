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

//! Drives the diagnostics overlay from a simulated frame loop and prints the
//! panel to stdout, standing in for an engine's update and draw callbacks.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use vantage_core::{ClientState, GraphicsCapabilities, NetworkEvent, NetworkStatsProvider};
use vantage_infra::{NetworkCounters, ProcessMemoryProvider, SysinfoSystemInfo, TrackingAllocator};
use vantage_telemetry::{DiagnosticsOverlay, OverlayConfig};

#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator::new(std::alloc::System);

#[derive(Parser, Debug)]
#[command(about = "Run the diagnostics overlay against a simulated game loop")]
struct Args {
    /// Optional JSON overlay configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulated seconds to run.
    #[arg(long, default_value_t = 12.0)]
    seconds: f64,

    /// Target frame rate of the simulated loop.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Print the panel every this many simulated seconds.
    #[arg(long, default_value_t = 3.0)]
    print_every: f64,

    /// Attach a simulated network session.
    #[arg(long)]
    network: bool,
}

/// Stand-in for a transport layer pushing traffic into the shared counters.
fn simulate_traffic(counters: &NetworkCounters, frame: u64) {
    // Bursty traffic: a larger snapshot every 30 frames on top of steady input.
    counters.record_sent(96);
    counters.record_received(if frame % 30 == 0 { 8 * 1024 } else { 160 });
    counters.set_ping(35 + (frame % 17) as i32);
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => OverlayConfig::from_file(path)?,
        None => OverlayConfig::default(),
    };

    let graphics = GraphicsCapabilities {
        device_name: "Headless Adapter".to_string(),
        api: "None".to_string(),
        api_version: "n/a".to_string(),
        ..Default::default()
    };
    let mut overlay = DiagnosticsOverlay::new(
        config,
        Box::new(ProcessMemoryProvider::new()),
        Box::new(SysinfoSystemInfo::new(graphics)),
    )?;

    let counters = NetworkCounters::new();
    if args.network {
        counters.set_server("127.0.0.1:5055", "local");
        counters.set_player_count(3);
        counters.set_client_state(ClientState::ConnectingToMaster);
        overlay = overlay.with_network(Box::new(counters.clone()));
    }

    let frame_time = 1.0 / args.fps;
    let total_frames = (args.seconds * args.fps).ceil() as u64;
    let mut next_print = args.print_every;
    let mut now = 0.0_f64;

    for frame in 0..total_frames {
        // Mild jitter so the smoothed and interval views differ.
        let jitter = if frame % 7 == 0 { 1.4 } else { 1.0 };
        let delta = frame_time * jitter;
        now += delta;

        if args.network {
            match frame {
                10 => {
                    counters.set_message_queue_running(true);
                    for event in [
                        NetworkEvent::ConnectedToServer,
                        NetworkEvent::JoinedRoom {
                            room: "sandbox".to_string(),
                        },
                    ] {
                        counters.apply_event(&event);
                        overlay.handle_network_event(&event);
                    }
                }
                120 => {
                    let event = NetworkEvent::PlayerEnteredRoom {
                        nickname: "bot-1".to_string(),
                    };
                    counters.apply_event(&event);
                    overlay.handle_network_event(&event);
                }
                _ => {}
            }
            if counters.is_message_queue_running() {
                simulate_traffic(&counters, frame);
            }
        }

        // Press the toggle key on frame 1 and keep it held for a few frames.
        overlay.update_hotkey((1..5).contains(&frame));
        overlay.advance_frame(now, delta as f32);

        if now >= next_print {
            next_print += args.print_every;
            if let Some(panel) = overlay.render() {
                println!("=== {} @ {:.2}s ===", panel.title, now);
                for line in panel.lines() {
                    println!("  {line}");
                }
            }
        }
    }

    if args.network {
        let event = NetworkEvent::Disconnected {
            reason: "ClientDisconnect".to_string(),
        };
        counters.apply_event(&event);
        overlay.handle_network_event(&event);
    }

    log::info!("Simulated {total_frames} frames over {now:.2}s");
    Ok(())
}
