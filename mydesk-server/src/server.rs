use crate::config::ServerConfig;
use crate::coordinator::{Coordinator, CoordinatorHandle};
use crate::http::{health, room_lookup};
use crate::signaling::{SignalingService, ws_handler};
use anyhow::Context;
use axum::Router;
use axum::http::Method;
use axum::routing::get;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Wires the coordinator, the WebSocket endpoint and the HTTP side-channel together.
pub struct SignalingServer {
    config: ServerConfig,
    service: SignalingService,
}

impl SignalingServer {
    /// Spawns the coordinator task. Must be called inside a tokio runtime.
    pub fn new(config: ServerConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel(config.command_buffer);
        let service = SignalingService::new(CoordinatorHandle::new(cmd_tx), &config.server_name);

        let coordinator = Coordinator::new(cmd_rx, Arc::new(service.clone()), config.sweep);
        tokio::spawn(coordinator.run());

        Self { config, service }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn service(&self) -> &SignalingService {
        &self.service
    }

    pub fn router(&self) -> Router {
        // Desktop clients load from app/file origins, so CORS stays open.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any);

        Router::new()
            .route("/", get(health))
            .route("/room/{room_id}", get(room_lookup))
            .route("/ws", get(ws_handler))
            .layer(cors)
            .with_state(self.service.clone())
    }

    pub async fn bind(&self) -> anyhow::Result<TcpListener> {
        TcpListener::bind(self.config.bind_addr)
            .await
            .with_context(|| format!("failed to bind {}", self.config.bind_addr))
    }

    /// Serves on `listener` until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = listener.local_addr()?;
        info!("Signaling server listening on http://{}", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .context("signaling server failed")
    }
}
