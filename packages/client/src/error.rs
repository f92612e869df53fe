//! Client error definitions.

use std::time::Duration;

use roji_shared::{TransportError, ValueObjectError};
use thiserror::Error;

use crate::database::DatabaseError;

/// Errors returned by [`Client`](crate::Client) operations
#[derive(Debug, Error)]
pub enum ClientError {
    /// An argument failed validation; nothing was sent
    #[error(transparent)]
    Validation(#[from] ValueObjectError),

    /// An argument is missing or unusable; nothing was sent
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The connection failed or was closed
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server sent a packet that is not allowed at this point
    #[error("Protocol error: expected {expected}, received {received}")]
    Protocol {
        expected: &'static str,
        received: &'static str,
    },

    /// The server did not answer in time
    #[error("No response from the server within {0:?}")]
    Timeout(Duration),

    /// An earlier reply was left unread; the connection must be reopened
    #[error("Session is out of sync with the server, reconnect to continue")]
    Desynced,

    /// Persisting received state failed
    #[error(transparent)]
    Database(#[from] DatabaseError),
}
