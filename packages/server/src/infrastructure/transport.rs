//! [`Connection`] over an axum WebSocket.

use async_trait::async_trait;
use axum::extract::ws::{Message, WebSocket};
use roji_shared::{Connection, Packet, TransportError, codec};

/// Server side of a client session.
///
/// Every text message carries one frame. Ping and pong frames are skipped;
/// binary frames are rejected.
pub struct WebSocketConnection {
    socket: WebSocket,
}

impl WebSocketConnection {
    pub fn new(socket: WebSocket) -> Self {
        Self { socket }
    }
}

#[async_trait]
impl Connection for WebSocketConnection {
    async fn send(&mut self, packet: Option<Packet>) -> Result<(), TransportError> {
        let text = codec::encode(packet.as_ref())?;
        self.socket
            .send(Message::Text(text.into()))
            .await
            .map_err(|e| TransportError::Io(e.to_string()))
    }

    async fn read(&mut self) -> Result<Option<Packet>, TransportError> {
        loop {
            let message = match self.socket.recv().await {
                Some(Ok(message)) => message,
                Some(Err(e)) => return Err(TransportError::Io(e.to_string())),
                None => return Err(TransportError::Disconnected),
            };

            match message {
                Message::Text(text) => return codec::decode(text.as_str()),
                Message::Close(_) => return Err(TransportError::Disconnected),
                Message::Binary(_) => {
                    return Err(TransportError::Decode(
                        "binary frames are not supported".to_string(),
                    ));
                }
                Message::Ping(_) | Message::Pong(_) => {
                    tracing::trace!("Skipping ping/pong frame");
                }
            }
        }
    }
}
