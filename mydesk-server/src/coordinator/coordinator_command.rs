use crate::registry::RoomInfo;
use mydesk_core::{ClientMessage, ConnectionId, RoomCode};
use tokio::sync::oneshot;

/// Everything the coordinator reacts to, delivered in arrival order on one queue.
#[derive(Debug)]
pub enum CoordinatorCommand {
    /// A transport connection opened.
    Connect { connection_id: ConnectionId },

    /// A parsed protocol message from a client.
    Message {
        connection_id: ConnectionId,
        message: ClientMessage,
    },

    /// The transport closed. Cleans up as if the client had left.
    Disconnect { connection_id: ConnectionId },

    /// Lookup for the HTTP side-channel.
    RoomInfo {
        room_id: RoomCode,
        reply: oneshot::Sender<Option<RoomInfo>>,
    },

    Stats { reply: oneshot::Sender<CoordinatorStats> },

    /// Run the expiry sweep now instead of waiting for the timer.
    Sweep { reply: oneshot::Sender<Vec<RoomCode>> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinatorStats {
    pub active_rooms: usize,
    pub connections: usize,
}
