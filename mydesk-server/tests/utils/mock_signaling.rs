use async_trait::async_trait;
use mydesk_core::{ConnectionId, ServerMessage};
use mydesk_server::SignalingOutput;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

/// Mock SignalingOutput that captures all outgoing messages.
#[derive(Clone)]
pub struct MockSignalingOutput {
    /// Channel to send captured messages.
    tx: mpsc::UnboundedSender<(ConnectionId, ServerMessage)>,
    /// All captured messages (for verification).
    sent: Arc<Mutex<Vec<(ConnectionId, ServerMessage)>>>,
}

impl MockSignalingOutput {
    /// Create a new MockSignalingOutput and its receiver channel.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<(ConnectionId, ServerMessage)>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let signaling = Self {
            tx,
            sent: Arc::new(Mutex::new(Vec::new())),
        };
        (signaling, rx)
    }

    /// Create a MockSignalingOutput without a receiver (messages are only stored).
    pub fn new_stored_only() -> Self {
        Self::new().0
    }

    /// Everything delivered to `id`, in order.
    pub async fn messages_for(&self, id: &ConnectionId) -> Vec<ServerMessage> {
        self.sent
            .lock()
            .await
            .iter()
            .filter(|(to, _)| to == id)
            .map(|(_, msg)| msg.clone())
            .collect()
    }

    /// Removes and returns everything delivered to `id` so far.
    pub async fn take_for(&self, id: &ConnectionId) -> Vec<ServerMessage> {
        let mut sent = self.sent.lock().await;
        let (taken, kept): (Vec<_>, Vec<_>) = sent.drain(..).partition(|(to, _)| to == id);
        *sent = kept;
        taken.into_iter().map(|(_, msg)| msg).collect()
    }

    pub async fn total(&self) -> usize {
        self.sent.lock().await.len()
    }

    pub async fn clear(&self) {
        self.sent.lock().await.clear();
    }
}

#[async_trait]
impl SignalingOutput for MockSignalingOutput {
    async fn send(&self, connection_id: &ConnectionId, message: ServerMessage) {
        self.sent.lock().await.push((*connection_id, message.clone()));
        let _ = self.tx.send((*connection_id, message));
    }
}
