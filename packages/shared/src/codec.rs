//! Wire codec.
//!
//! One frame is one JSON document: a tagged [`Packet`] object, or `null` for
//! the end-of-stream marker. A frame is never an empty string.

use crate::{connection::TransportError, packet::Packet};

/// Encode one frame. `None` encodes the end-of-stream marker.
pub fn encode(frame: Option<&Packet>) -> Result<String, TransportError> {
    serde_json::to_string(&frame).map_err(|e| TransportError::Encode(e.to_string()))
}

/// Decode one frame. Returns `Ok(None)` for the end-of-stream marker.
pub fn decode(text: &str) -> Result<Option<Packet>, TransportError> {
    serde_json::from_str(text).map_err(|e| TransportError::Decode(e.to_string()))
}
