//! Domain layer error definitions.

use thiserror::Error;

use super::{ChannelId, Name};

/// Errors returned by a [`ChannelRepository`](super::ChannelRepository)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No channel with this id is stored
    #[error("Channel not found: {0}")]
    ChannelNotFound(ChannelId),

    /// The user has no pending update for this channel
    #[error("No pending update of channel {channel_id} for user '{username}'")]
    PendingUpdateNotFound { username: Name, channel_id: ChannelId },
}
