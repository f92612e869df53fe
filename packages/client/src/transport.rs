//! [`Connection`] over a tokio-tungstenite WebSocket.

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use roji_shared::{Connection, Packet, TransportError, codec};
use tokio::net::TcpStream;
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async,
    tungstenite::{Error as WsError, Message},
};

/// Client side of a session with the server.
pub struct WsConnection {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WsConnection {
    /// Open a WebSocket to `url` (for example `ws://localhost:1337/ws`).
    pub async fn connect(url: &str) -> Result<Self, TransportError> {
        let (stream, _response) = connect_async(url).await.map_err(map_ws_error)?;
        tracing::info!("Connected to {}", url);
        Ok(Self { stream })
    }

    /// Send a close frame. Errors are ignored since the session is over anyway.
    pub async fn close(mut self) {
        if let Err(e) = self.stream.close(None).await {
            tracing::debug!("Close handshake failed: {}", e);
        }
    }
}

fn map_ws_error(error: WsError) -> TransportError {
    match error {
        WsError::ConnectionClosed | WsError::AlreadyClosed => TransportError::Disconnected,
        WsError::Io(e) => TransportError::from(e),
        other => TransportError::Io(other.to_string()),
    }
}

#[async_trait]
impl Connection for WsConnection {
    async fn send(&mut self, packet: Option<Packet>) -> Result<(), TransportError> {
        let text = codec::encode(packet.as_ref())?;
        self.stream
            .send(Message::Text(text.into()))
            .await
            .map_err(map_ws_error)
    }

    async fn read(&mut self) -> Result<Option<Packet>, TransportError> {
        loop {
            let message = match self.stream.next().await {
                Some(Ok(message)) => message,
                Some(Err(e)) => return Err(map_ws_error(e)),
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
                Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => {
                    tracing::trace!("Skipping control frame");
                }
            }
        }
    }
}
