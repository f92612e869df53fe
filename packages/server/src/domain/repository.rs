//! Repository trait（データアクセス層の抽象化）
//!
//! ドメイン層が定義し、インフラ層が実装します（依存性の逆転）。

use async_trait::async_trait;

use super::{Channel, ChannelId, Name, PendingUpdate, RepositoryError};

/// Storage of channels and of the updates each user has not fetched yet.
#[async_trait]
pub trait ChannelRepository: Send + Sync {
    /// Get a channel by id.
    async fn get_channel(&self, channel_id: &ChannelId) -> Result<Channel, RepositoryError>;

    /// Insert or replace a channel.
    async fn save_channel(&self, channel: Channel);

    /// All channels, oldest first.
    async fn list_channels(&self) -> Vec<Channel>;

    /// Queue an update for `username`. A pending update of the same channel is replaced.
    async fn queue_update(&self, username: &Name, update: PendingUpdate);

    /// Pending updates of `username`, in the order they were first queued.
    async fn pending_updates(&self, username: &Name) -> Vec<PendingUpdate>;

    /// Remove a delivered update.
    ///
    /// Only removes the entry if it still equals `update`; a newer update of
    /// the same channel queued in the meantime stays pending.
    async fn acknowledge_update(
        &self,
        username: &Name,
        update: &PendingUpdate,
    ) -> Result<(), RepositoryError>;
}
