//! Domain values shared by the client and the server.
//!
//! This module contains validation logic that is independent of
//! the wire format and of any transport.

pub mod error;
pub mod factory;
pub mod value_object;

pub use error::ValueObjectError;
pub use factory::ChannelIdFactory;
pub use value_object::{ChannelId, Name, Timestamp};
