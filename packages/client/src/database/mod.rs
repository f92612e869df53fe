//! Client-side storage of channel state.
//!
//! The engine only needs [`Database::save_channel`]; how the mapping is
//! persisted is up to the implementation.

pub mod inmemory;
pub mod json_file;

use async_trait::async_trait;
use roji_shared::{ChannelId, Name};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use inmemory::InMemoryDatabase;
pub use json_file::JsonFileDatabase;

/// Local record kept for each channel name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelConfig {
    pub id: ChannelId,
}

impl ChannelConfig {
    pub fn new(id: ChannelId) -> Self {
        Self { id }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DatabaseError {
    #[error("Database I/O failed: {0}")]
    Io(String),

    #[error("Database content is invalid: {0}")]
    Serialization(String),
}

/// Mapping from channel name to [`ChannelConfig`].
#[async_trait]
pub trait Database: Send + Sync {
    /// Insert or overwrite the entry of `name`. Saving the same pair twice
    /// leaves the same state as saving it once.
    async fn save_channel(&self, name: Name, config: ChannelConfig) -> Result<(), DatabaseError>;

    /// Every stored entry, ordered by name.
    async fn list_channels(&self) -> Result<Vec<(Name, ChannelConfig)>, DatabaseError>;
}
