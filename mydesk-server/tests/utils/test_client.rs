use anyhow::{Context, Result, bail};
use futures::{SinkExt, StreamExt};
use mydesk_core::{ClientMessage, ConnectionId, ServerMessage};
use mydesk_server::{ServerConfig, SignalingServer};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::oneshot;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use super::signal_helpers::FRAME_TIMEOUT_MS;

/// A signaling server bound to an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        let config = ServerConfig::default().with_bind_addr(SocketAddr::from(([127, 0, 0, 1], 0)));
        let server = SignalingServer::new(config);
        let listener = server.bind().await?;
        let addr = listener.local_addr()?;

        let (shutdown, stopped) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let _ = server
                .serve(listener, async move {
                    let _ = stopped.await;
                })
                .await;
        });

        Ok(Self {
            addr,
            shutdown: Some(shutdown),
        })
    }

    pub fn http_url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// WebSocket client speaking the signaling protocol.
pub struct TestClient {
    pub connection_id: ConnectionId,
    ws: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl TestClient {
    /// Connects and consumes the `welcome` frame.
    pub async fn connect(server: &TestServer) -> Result<Self> {
        let (ws, _) = connect_async(format!("ws://{}/ws", server.addr))
            .await
            .context("WebSocket handshake failed")?;

        let mut client = Self {
            connection_id: ConnectionId::new(),
            ws,
        };

        match client.recv().await? {
            ServerMessage::Welcome { connection_id } => client.connection_id = connection_id,
            other => bail!("Expected welcome, got {:?}", other),
        }

        Ok(client)
    }

    pub async fn send(&mut self, msg: &ClientMessage) -> Result<()> {
        let json = serde_json::to_string(msg)?;
        self.send_raw(&json).await
    }

    pub async fn send_raw(&mut self, text: &str) -> Result<()> {
        self.ws
            .send(Message::Text(text.to_string().into()))
            .await
            .context("Failed to send frame")
    }

    /// Next protocol message, skipping control frames.
    pub async fn recv(&mut self) -> Result<ServerMessage> {
        loop {
            let frame = tokio::time::timeout(
                Duration::from_millis(FRAME_TIMEOUT_MS),
                self.ws.next(),
            )
            .await
            .context("Timed out waiting for a frame")?;

            match frame {
                Some(Ok(Message::Text(text))) => {
                    return serde_json::from_str(&text).context("Server sent malformed JSON");
                }
                Some(Ok(Message::Close(_))) | None => bail!("Connection closed"),
                Some(Ok(_)) => continue,
                Some(Err(e)) => bail!("WebSocket error: {}", e),
            }
        }
    }

    pub async fn close(mut self) -> Result<()> {
        self.ws.close(None).await.context("Failed to close")
    }
}
