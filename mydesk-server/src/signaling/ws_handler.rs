use crate::{SignalingError, SignalingService};
use axum::extract::State;
use axum::extract::WebSocketUpgrade;
use axum::extract::ws::{Message, WebSocket};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use mydesk_core::{ClientMessage, ConnectionId, ServerMessage};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(service): State<SignalingService>,
) -> impl IntoResponse {
    let connection_id = ConnectionId::new();

    ws.on_upgrade(move |socket| handle_socket(socket, connection_id, service))
}

async fn handle_socket(socket: WebSocket, connection_id: ConnectionId, service: SignalingService) {
    info!("New WebSocket connection: {}", connection_id);

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    service.add_peer(connection_id, tx);
    if service.coordinator().connect(connection_id).await.is_err() {
        error!("Coordinator is gone; refusing {}", connection_id);
        service.remove_peer(&connection_id);
        return;
    }
    service.send_message(&connection_id, &ServerMessage::Welcome { connection_id });

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let coordinator = service.coordinator().clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                        Ok(message) => {
                            if let Err(e) = coordinator.dispatch(connection_id, message).await {
                                error!("Coordinator died: {}", e);
                                break;
                            }
                        }
                        Err(e) => {
                            warn!(connection = %connection_id, "{}", SignalingError::from(e));
                        }
                    },
                    Message::Binary(_) => {
                        debug!("Ignoring binary frame from {}", connection_id);
                    }
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    service.remove_peer(&connection_id);
    if let Err(e) = service.coordinator().disconnect(connection_id).await {
        error!("Failed to clean up after {}: {}", connection_id, e);
    }
    info!(
        reason = %SignalingError::TransportClosed,
        "WebSocket disconnected: {}",
        connection_id
    );
}
