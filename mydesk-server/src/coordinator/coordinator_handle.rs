use crate::coordinator::{CoordinatorCommand, CoordinatorStats};
use crate::error::SignalingError;
use crate::registry::RoomInfo;
use mydesk_core::{ClientMessage, ConnectionId, RoomCode};
use tokio::sync::{mpsc, oneshot};

/// Cloneable front door to the coordinator task.
#[derive(Clone, Debug)]
pub struct CoordinatorHandle {
    command_tx: mpsc::Sender<CoordinatorCommand>,
}

impl CoordinatorHandle {
    pub fn new(command_tx: mpsc::Sender<CoordinatorCommand>) -> Self {
        Self { command_tx }
    }

    async fn submit(&self, cmd: CoordinatorCommand) -> Result<(), SignalingError> {
        self.command_tx
            .send(cmd)
            .await
            .map_err(|_| SignalingError::CoordinatorClosed)
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> CoordinatorCommand,
    ) -> Result<T, SignalingError> {
        let (reply, rx) = oneshot::channel();
        self.submit(build(reply)).await?;
        rx.await.map_err(|_| SignalingError::CoordinatorClosed)
    }

    pub async fn connect(&self, connection_id: ConnectionId) -> Result<(), SignalingError> {
        self.submit(CoordinatorCommand::Connect { connection_id })
            .await
    }

    pub async fn dispatch(
        &self,
        connection_id: ConnectionId,
        message: ClientMessage,
    ) -> Result<(), SignalingError> {
        self.submit(CoordinatorCommand::Message {
            connection_id,
            message,
        })
        .await
    }

    pub async fn disconnect(&self, connection_id: ConnectionId) -> Result<(), SignalingError> {
        self.submit(CoordinatorCommand::Disconnect { connection_id })
            .await
    }

    pub async fn room_info(&self, room_id: RoomCode) -> Result<Option<RoomInfo>, SignalingError> {
        self.request(|reply| CoordinatorCommand::RoomInfo { room_id, reply })
            .await
    }

    /// Also serves as a barrier: it resolves only after every earlier command was handled.
    pub async fn stats(&self) -> Result<CoordinatorStats, SignalingError> {
        self.request(|reply| CoordinatorCommand::Stats { reply })
            .await
    }

    pub async fn sweep(&self) -> Result<Vec<RoomCode>, SignalingError> {
        self.request(|reply| CoordinatorCommand::Sweep { reply })
            .await
    }
}
