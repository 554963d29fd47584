use crate::coordinator::CoordinatorHandle;
use crate::signaling::SignalingOutput;
use async_trait::async_trait;
use axum::extract::ws::Message;
use dashmap::DashMap;
use mydesk_core::{ConnectionId, ServerMessage};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, warn};

struct SignalingInner {
    peers: DashMap<ConnectionId, mpsc::UnboundedSender<Message>>,
    server_name: String,
}

/// Tracks live WebSocket connections and delivers coordinator output to them.
#[derive(Clone)]
pub struct SignalingService {
    inner: Arc<SignalingInner>,
    coordinator: CoordinatorHandle,
}

impl SignalingService {
    pub fn new(coordinator: CoordinatorHandle, server_name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(SignalingInner {
                peers: DashMap::new(),
                server_name: server_name.into(),
            }),
            coordinator,
        }
    }

    pub fn coordinator(&self) -> &CoordinatorHandle {
        &self.coordinator
    }

    pub fn server_name(&self) -> &str {
        &self.inner.server_name
    }

    pub fn add_peer(&self, connection_id: ConnectionId, tx: mpsc::UnboundedSender<Message>) {
        self.inner.peers.insert(connection_id, tx);
    }

    pub fn remove_peer(&self, connection_id: &ConnectionId) {
        self.inner.peers.remove(connection_id);
    }

    pub fn peer_count(&self) -> usize {
        self.inner.peers.len()
    }

    pub fn send_message(&self, connection_id: &ConnectionId, msg: &ServerMessage) {
        let Some(peer) = self.inner.peers.get(connection_id) else {
            warn!(
                "Attempted to send message to disconnected client {}",
                connection_id
            );
            return;
        };

        match serde_json::to_string(msg) {
            Ok(json) => {
                if let Err(e) = peer.send(Message::Text(json.into())) {
                    error!("Failed to send WS message to {}: {:?}", connection_id, e);
                }
            }
            Err(e) => error!("Failed to serialize server message: {}", e),
        }
    }
}

#[async_trait]
impl SignalingOutput for SignalingService {
    async fn send(&self, connection_id: &ConnectionId, message: ServerMessage) {
        self.send_message(connection_id, &message);
    }
}
