//! Connection contract shared by the client and the server.

use async_trait::async_trait;
use thiserror::Error;

use crate::packet::Packet;

/// Errors raised by a [`Connection`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The peer closed the connection.
    #[error("transport disconnected")]
    Disconnected,

    /// Reading from or writing to the underlying transport failed.
    #[error("io error: {0}")]
    Io(String),

    /// A frame could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// A received frame is not a valid packet or end-of-stream marker.
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<std::io::Error> for TransportError {
    fn from(error: std::io::Error) -> Self {
        TransportError::Io(error.to_string())
    }
}

/// A bidirectional, ordered packet transport.
///
/// Packets sent by one side arrive at the other side in send order. Both
/// methods take `&mut self`: a connection has exactly one reader and one
/// writer at a time.
///
/// `None` is the end-of-stream marker. It closes one logical exchange (for
/// example a batch of channel updates), not the connection.
#[async_trait]
pub trait Connection: Send {
    /// Transmit one packet, or the end-of-stream marker when `packet` is `None`.
    async fn send(&mut self, packet: Option<Packet>) -> Result<(), TransportError>;

    /// Wait for the next packet. `Ok(None)` is the end-of-stream marker.
    ///
    /// Dropping the returned future before it completes must not lose or
    /// corrupt a frame.
    async fn read(&mut self) -> Result<Option<Packet>, TransportError>;
}
