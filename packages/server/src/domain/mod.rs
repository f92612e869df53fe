//! Domain layer for the sync server.
//!
//! This module contains business logic that is independent of
//! the wire format and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod repository;

pub use entity::{Channel, PendingUpdate};
pub use error::RepositoryError;
pub use repository::ChannelRepository;
pub use roji_shared::domain::{ChannelId, ChannelIdFactory, Name, Timestamp, ValueObjectError};
