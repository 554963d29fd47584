use async_trait::async_trait;
use mydesk_core::{ConnectionId, ServerMessage};

/// Outbound side of the signaling channel, implemented by the transport.
///
/// The coordinator only ever talks to clients through this trait, so a
/// failed delivery stays a transport concern and never touches room state.
#[async_trait]
pub trait SignalingOutput: Send + Sync {
    /// Deliver one message to a single connection.
    async fn send(&self, connection_id: &ConnectionId, message: ServerMessage);

    /// Deliver the same message to several connections.
    async fn send_all(&self, connection_ids: &[ConnectionId], message: ServerMessage) {
        for id in connection_ids {
            self.send(id, message.clone()).await;
        }
    }
}
