//! WebSocket connection handler.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{WebSocket, WebSocketUpgrade, rejection::WebSocketUpgradeRejection},
    },
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{
    domain::Identity,
    infrastructure::transport,
    room::Client,
    ui::{identity::resolve_identity, state::AppState},
};

/// Upgrade a request into a room member.
///
/// The request is rejected before the upgrade when it carries no identity.
pub async fn room_handler(
    ws: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    let identity = match resolve_identity(&headers) {
        Ok(identity) => identity,
        Err(e) => {
            tracing::warn!("Rejecting connection: {}", e);
            return StatusCode::UNAUTHORIZED.into_response();
        }
    };

    let ws = match ws {
        Ok(ws) => ws,
        Err(rejection) => {
            tracing::warn!("WebSocket upgrade rejected for '{}': {}", identity, rejection);
            return rejection.into_response();
        }
    };

    let name = identity.clone();
    ws.on_failed_upgrade(move |e| {
        tracing::error!("WebSocket upgrade failed for '{}': {}", name, e);
    })
    .on_upgrade(move |socket| handle_socket(socket, state, identity))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, identity: Identity) {
    let client = match Client::join(state.room.clone(), identity).await {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to join room: {}", e);
            return;
        }
    };

    let client_id = client.id();
    tracing::info!("Client '{}' ({}) connected", client.identity(), client_id);

    let (receiver, sender) = transport::split(socket);
    client.run(receiver, sender).await;

    tracing::info!("Client '{}' disconnected", client_id);
}
