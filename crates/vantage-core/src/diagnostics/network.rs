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

//! Network accessors for hosts built with a realtime networking layer.

use std::fmt::{self, Debug, Display};

/// The connection state reported by the networking client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClientState {
    /// The client exists but has never connected.
    #[default]
    PeerCreated,
    /// Connecting to the master/lobby server.
    ConnectingToMaster,
    /// Connected to the master server and ready to match-make.
    ConnectedToMaster,
    /// Authenticating with the name server or master.
    Authenticating,
    /// Joining a room.
    Joining,
    /// Inside a room.
    Joined,
    /// Leaving a room.
    Leaving,
    /// Tearing down the connection.
    Disconnecting,
    /// No connection.
    Disconnected,
}

impl Display for ClientState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

/// A summary of the room the local client is in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomInfo {
    /// The room's name.
    pub name: String,
    /// The number of players currently in the room, including the local one.
    pub player_count: u32,
}

/// Read-only access to the networking client's statistics.
pub trait NetworkStatsProvider: Debug {
    /// Whether the client is currently dispatching incoming messages.
    fn is_message_queue_running(&self) -> bool;
    /// The current round-trip time to the server, in milliseconds.
    fn ping_ms(&self) -> i32;
    /// Total payload bytes received since the client was created.
    fn bytes_received(&self) -> u64;
    /// Total payload bytes sent since the client was created.
    fn bytes_sent(&self) -> u64;
    /// The address of the server the client is talking to.
    fn server_address(&self) -> String;
    /// The cloud region the client connected to.
    fn cloud_region(&self) -> String;
    /// The number of players online across the application.
    fn player_count(&self) -> u32;
    /// The room the client is in, if any.
    fn current_room(&self) -> Option<RoomInfo>;
    /// How many reliable commands had to be resent.
    fn resent_reliable_commands(&self) -> u32;
    /// The client's connection state.
    fn client_state(&self) -> ClientState;
}

/// Lifecycle callbacks raised by the networking layer.
///
/// The overlay only logs these; they never change what it displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkEvent {
    /// The client reached the master server.
    ConnectedToServer,
    /// The client lost its connection.
    Disconnected {
        /// Why the connection ended.
        reason: String,
    },
    /// The local client joined a room.
    JoinedRoom {
        /// The room's name.
        room: String,
    },
    /// A remote player entered the current room.
    PlayerEnteredRoom {
        /// The player's display name.
        nickname: String,
    },
    /// A remote player left the current room.
    PlayerLeftRoom {
        /// The player's display name.
        nickname: String,
    },
}
