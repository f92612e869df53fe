//! Shared protocol crate for Roji.
//!
//! Contains the packet model, the wire codec, the [`Connection`] contract that
//! both the client and the server talk through, and the logging / time
//! helpers used by the binaries.

pub mod codec;
pub mod connection;
pub mod domain;
pub mod logger;
pub mod packet;
pub mod time;

pub use connection::{Connection, TransportError};
pub use domain::{ChannelId, ChannelIdFactory, Name, Timestamp, ValueObjectError};
pub use packet::Packet;
