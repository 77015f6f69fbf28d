//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::{infrastructure::dto::http::RoomStateDto, ui::state::AppState};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Debug endpoint returning current room membership
pub async fn room_state(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RoomStateDto>, StatusCode> {
    match state.room.members().await {
        Ok(members) => Ok(Json(RoomStateDto::from(members.as_slice()))),
        Err(e) => {
            tracing::error!("Failed to read room membership: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
