//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{State, WebSocketUpgrade, ws::WebSocket},
    response::IntoResponse,
};

use crate::{infrastructure::transport::WebSocketConnection, ui::state::AppState};

use super::session::SessionHandler;

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    tracing::info!("Client connected");

    let connection = WebSocketConnection::new(socket);
    let session = SessionHandler::new(connection, state.repository.clone());

    if let Err(e) = session.run().await {
        tracing::warn!("Session closed with error: {}", e);
    }
}
