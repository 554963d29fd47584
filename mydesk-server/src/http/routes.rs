use crate::SignalingService;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{SecondsFormat, Utc};
use mydesk_core::RoomCode;
use serde::Serialize;
use serde_json::json;
use tracing::error;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub name: String,
    pub status: &'static str,
    pub active_rooms: usize,
    pub timestamp: String,
}

/// `GET /`: process status and number of live rooms.
pub async fn health(State(service): State<SignalingService>) -> Response {
    match service.coordinator().stats().await {
        Ok(stats) => Json(HealthResponse {
            name: service.server_name().to_string(),
            status: "running",
            active_rooms: stats.active_rooms,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
        .into_response(),
        Err(e) => unavailable(e),
    }
}

/// `GET /room/{room_id}`: membership summary, or 404 for an unknown code.
pub async fn room_lookup(
    Path(room_id): Path<String>,
    State(service): State<SignalingService>,
) -> Response {
    match service.coordinator().room_info(RoomCode::from(room_id)).await {
        Ok(Some(info)) => Json(info).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Room not found" })),
        )
            .into_response(),
        Err(e) => unavailable(e),
    }
}

fn unavailable(e: crate::SignalingError) -> Response {
    error!("HTTP request failed: {}", e);
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({ "error": e.to_string() })),
    )
        .into_response()
}
