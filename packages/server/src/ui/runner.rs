//! Server startup.

use std::{future::Future, sync::Arc};

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
    config::ServerConfig,
    error::ServerError,
    room::Room,
    ui::{
        handler::{health_check, room_handler, room_state},
        signal::shutdown_signal,
        state::AppState,
    },
};

/// Bind the configured address and serve until Ctrl+C or SIGTERM.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let listener = TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.addr,
            source,
        })?;

    serve(listener, &config, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    config: &ServerConfig,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let settings = config.room_settings();
    let room = Room::spawn(settings, config.tracer());
    let app = build_router(Arc::new(AppState::new(room)));

    match listener.local_addr() {
        Ok(addr) => tracing::info!(
            "Listening on {} (outbound capacity {}, echo {})",
            addr,
            settings.outbound_capacity,
            settings.echo_to_sender
        ),
        Err(e) => tracing::warn!("Listening on unknown address: {}", e),
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/room", get(room_handler))
        .route("/api/health", get(health_check))
        .route("/api/room", get(room_state))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
