use crate::model::connection::ConnectionId;
use crate::model::room::RoomCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Messages a client sends over its signaling connection.
///
/// `signal` and `candidate` payloads are opaque; the server only routes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "event",
    content = "data",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ClientMessage {
    CreateRoom {
        room_id: RoomCode,
    },
    JoinRoom {
        room_id: RoomCode,
    },
    LeaveRoom {
        room_id: RoomCode,
    },
    Signal {
        room_id: RoomCode,
        signal: Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target_id: Option<ConnectionId>,
    },
    IceCandidate {
        room_id: RoomCode,
        candidate: Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target_id: Option<ConnectionId>,
    },
}

impl ClientMessage {
    pub fn room_id(&self) -> &RoomCode {
        match self {
            ClientMessage::CreateRoom { room_id }
            | ClientMessage::JoinRoom { room_id }
            | ClientMessage::LeaveRoom { room_id }
            | ClientMessage::Signal { room_id, .. }
            | ClientMessage::IceCandidate { room_id, .. } => room_id,
        }
    }
}

/// Messages the server emits to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "event",
    content = "data",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ServerMessage {
    /// First frame on every connection.
    Welcome {
        connection_id: ConnectionId,
    },
    RoomCreated {
        room_id: RoomCode,
        success: bool,
    },
    RoomJoined {
        room_id: RoomCode,
        success: bool,
    },
    RoomError {
        error: String,
        room_id: RoomCode,
    },
    ViewerJoined {
        viewer_id: ConnectionId,
        viewer_count: usize,
    },
    ViewerLeft {
        viewer_id: ConnectionId,
        viewer_count: usize,
    },
    /// Tells the host to open the peer-to-peer handshake with this viewer.
    StartCall {
        viewer_id: ConnectionId,
    },
    HostDisconnected {
        room_id: RoomCode,
    },
    /// The room was claimed by another connection; the receiver is no longer its host.
    HostReplaced {
        room_id: RoomCode,
    },
    Signal {
        signal: Value,
        sender_id: ConnectionId,
    },
    IceCandidate {
        candidate: Value,
        sender_id: ConnectionId,
    },
}
