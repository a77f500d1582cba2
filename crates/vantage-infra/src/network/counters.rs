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

//! A thread-safe network statistics sink.
//!
//! The transport layer records traffic and session changes into a
//! `NetworkCounters` handle; a clone of the same handle is given to the overlay
//! as its [`NetworkStatsProvider`]. Counters are atomics so the transport may
//! run on its own thread.

use std::sync::atomic::{AtomicBool, AtomicI32, AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use vantage_core::{ClientState, NetworkEvent, NetworkStatsProvider, RoomInfo};

#[derive(Debug, Default)]
struct Session {
    server_address: String,
    cloud_region: String,
    room: Option<RoomInfo>,
    state: ClientState,
}

#[derive(Debug, Default)]
struct Inner {
    queue_running: AtomicBool,
    ping_ms: AtomicI32,
    bytes_received: AtomicU64,
    bytes_sent: AtomicU64,
    resent_reliable: AtomicU32,
    player_count: AtomicU32,
    session: Mutex<Session>,
}

/// A cloneable handle to shared network statistics.
#[derive(Debug, Clone, Default)]
pub struct NetworkCounters {
    inner: Arc<Inner>,
}

impl NetworkCounters {
    /// Creates empty counters in the `PeerCreated` state.
    pub fn new() -> Self {
        Self::default()
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.inner
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds `bytes` to the received total.
    pub fn record_received(&self, bytes: u64) {
        self.inner.bytes_received.fetch_add(bytes, Ordering::Relaxed);
    }

    /// Adds `bytes` to the sent total.
    pub fn record_sent(&self, bytes: u64) {
        self.inner.bytes_sent.fetch_add(bytes, Ordering::Relaxed);
    }

    /// Counts one resent reliable command.
    pub fn record_resent_reliable(&self) {
        self.inner.resent_reliable.fetch_add(1, Ordering::Relaxed);
    }

    /// Sets the latest round-trip time.
    pub fn set_ping(&self, ping_ms: i32) {
        self.inner.ping_ms.store(ping_ms, Ordering::Relaxed);
    }

    /// Sets whether incoming messages are being dispatched.
    pub fn set_message_queue_running(&self, running: bool) {
        self.inner.queue_running.store(running, Ordering::Relaxed);
    }

    /// Sets the application-wide online player count.
    pub fn set_player_count(&self, players: u32) {
        self.inner.player_count.store(players, Ordering::Relaxed);
    }

    /// Sets the server address and region.
    pub fn set_server(&self, address: impl Into<String>, region: impl Into<String>) {
        let mut session = self.session();
        session.server_address = address.into();
        session.cloud_region = region.into();
    }

    /// Sets the connection state.
    pub fn set_client_state(&self, state: ClientState) {
        self.session().state = state;
    }

    /// Folds a lifecycle callback into the session state.
    pub fn apply_event(&self, event: &NetworkEvent) {
        let mut session = self.session();
        match event {
            NetworkEvent::ConnectedToServer => {
                session.state = ClientState::ConnectedToMaster;
            }
            NetworkEvent::Disconnected { .. } => {
                session.state = ClientState::Disconnected;
                session.room = None;
                self.inner.queue_running.store(false, Ordering::Relaxed);
            }
            NetworkEvent::JoinedRoom { room } => {
                session.state = ClientState::Joined;
                session.room = Some(RoomInfo {
                    name: room.clone(),
                    player_count: 1,
                });
            }
            NetworkEvent::PlayerEnteredRoom { .. } => {
                if let Some(room) = session.room.as_mut() {
                    room.player_count += 1;
                }
            }
            NetworkEvent::PlayerLeftRoom { .. } => {
                if let Some(room) = session.room.as_mut() {
                    room.player_count = room.player_count.saturating_sub(1);
                }
            }
        }
    }
}

impl NetworkStatsProvider for NetworkCounters {
    fn is_message_queue_running(&self) -> bool {
        self.inner.queue_running.load(Ordering::Relaxed)
    }

    fn ping_ms(&self) -> i32 {
        self.inner.ping_ms.load(Ordering::Relaxed)
    }

    fn bytes_received(&self) -> u64 {
        self.inner.bytes_received.load(Ordering::Relaxed)
    }

    fn bytes_sent(&self) -> u64 {
        self.inner.bytes_sent.load(Ordering::Relaxed)
    }

    fn server_address(&self) -> String {
        self.session().server_address.clone()
    }

    fn cloud_region(&self) -> String {
        self.session().cloud_region.clone()
    }

    fn player_count(&self) -> u32 {
        self.inner.player_count.load(Ordering::Relaxed)
    }

    fn current_room(&self) -> Option<RoomInfo> {
        self.session().room.clone()
    }

    fn resent_reliable_commands(&self) -> u32 {
        self.inner.resent_reliable.load(Ordering::Relaxed)
    }

    fn client_state(&self) -> ClientState {
        self.session().state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_counters() {
        let transport = NetworkCounters::new();
        let overlay_side = transport.clone();

        transport.record_received(1500);
        transport.record_sent(200);
        transport.set_ping(35);

        assert_eq!(overlay_side.bytes_received(), 1500);
        assert_eq!(overlay_side.bytes_sent(), 200);
        assert_eq!(overlay_side.ping_ms(), 35);
    }

    #[test]
    fn test_traffic_from_another_thread() {
        let counters = NetworkCounters::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let counters = counters.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        counters.record_received(10);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(counters.bytes_received(), 4000);
    }

    #[test]
    fn test_lifecycle_events_update_session() {
        let counters = NetworkCounters::new();
        counters.set_message_queue_running(true);

        counters.apply_event(&NetworkEvent::ConnectedToServer);
        assert_eq!(counters.client_state(), ClientState::ConnectedToMaster);

        counters.apply_event(&NetworkEvent::JoinedRoom {
            room: "lobby-7".to_string(),
        });
        counters.apply_event(&NetworkEvent::PlayerEnteredRoom {
            nickname: "ada".to_string(),
        });
        assert_eq!(
            counters.current_room(),
            Some(RoomInfo {
                name: "lobby-7".to_string(),
                player_count: 2,
            })
        );

        counters.apply_event(&NetworkEvent::Disconnected {
            reason: "ClientTimeout".to_string(),
        });
        assert_eq!(counters.client_state(), ClientState::Disconnected);
        assert_eq!(counters.current_room(), None);
        assert!(!counters.is_message_queue_running());
    }
}
