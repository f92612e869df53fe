//! Server startup.

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::infrastructure::repository::InMemoryChannelRepository;

use super::{
    handler::{get_channels, health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// Build the router: WebSocket sessions on `/ws`, debug endpoints under `/api`.
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ws", get(websocket_handler))
        .route("/api/health", get(health_check))
        .route("/api/channels", get(get_channels))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let app = create_app(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Bind `host:port` with an empty in-memory store and serve until Ctrl-C / SIGTERM.
pub async fn run(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::new(Arc::new(InMemoryChannelRepository::new())));

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    tracing::info!("WebSocket endpoint: ws://{}/ws", addr);

    serve(listener, state, shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}
