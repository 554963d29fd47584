use anyhow::{Context, Result};
use mydesk_core::{ClientMessage, ConnectionId, RoomCode};
use mydesk_server::CoordinatorHandle;

/// Timeout for a single websocket frame (ms).
pub const FRAME_TIMEOUT_MS: u64 = 5000;

/// Waits until every command sent so far has been handled.
pub async fn settle(handle: &CoordinatorHandle) -> Result<()> {
    handle.stats().await.context("Coordinator stopped")?;
    Ok(())
}

pub async fn create_room(handle: &CoordinatorHandle, id: ConnectionId, code: &str) -> Result<()> {
    handle
        .dispatch(
            id,
            ClientMessage::CreateRoom {
                room_id: RoomCode::from(code),
            },
        )
        .await
        .context("Failed to send create-room")?;
    settle(handle).await
}

pub async fn join_room(handle: &CoordinatorHandle, id: ConnectionId, code: &str) -> Result<()> {
    handle
        .dispatch(
            id,
            ClientMessage::JoinRoom {
                room_id: RoomCode::from(code),
            },
        )
        .await
        .context("Failed to send join-room")?;
    settle(handle).await
}

pub async fn leave_room(handle: &CoordinatorHandle, id: ConnectionId, code: &str) -> Result<()> {
    handle
        .dispatch(
            id,
            ClientMessage::LeaveRoom {
                room_id: RoomCode::from(code),
            },
        )
        .await
        .context("Failed to send leave-room")?;
    settle(handle).await
}

pub async fn disconnect(handle: &CoordinatorHandle, id: ConnectionId) -> Result<()> {
    handle
        .disconnect(id)
        .await
        .context("Failed to send disconnect")?;
    settle(handle).await
}
