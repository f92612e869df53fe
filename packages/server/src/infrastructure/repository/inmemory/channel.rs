//! InMemory Channel Repository 実装
//!
//! ドメイン層が定義する ChannelRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。プロセス終了時に内容は失われます。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Channel, ChannelId, ChannelRepository, Name, PendingUpdate, RepositoryError};

/// インメモリ Channel Repository 実装
#[derive(Default)]
pub struct InMemoryChannelRepository {
    /// チャンネル ID → チャンネル
    channels: Mutex<HashMap<ChannelId, Channel>>,
    /// ユーザー名 → 未配信の更新（キュー順）
    pending: Mutex<HashMap<Name, Vec<PendingUpdate>>>,
}

impl InMemoryChannelRepository {
    /// 新しい InMemoryChannelRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChannelRepository for InMemoryChannelRepository {
    async fn get_channel(&self, channel_id: &ChannelId) -> Result<Channel, RepositoryError> {
        let channels = self.channels.lock().await;
        channels
            .get(channel_id)
            .cloned()
            .ok_or(RepositoryError::ChannelNotFound(*channel_id))
    }

    async fn save_channel(&self, channel: Channel) {
        let mut channels = self.channels.lock().await;
        channels.insert(channel.id, channel);
    }

    async fn list_channels(&self) -> Vec<Channel> {
        let channels = self.channels.lock().await;
        let mut list: Vec<Channel> = channels.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        list
    }

    async fn queue_update(&self, username: &Name, update: PendingUpdate) {
        let mut pending = self.pending.lock().await;
        let queue = pending.entry(username.clone()).or_default();
        match queue.iter_mut().find(|u| u.channel_id == update.channel_id) {
            Some(existing) => *existing = update,
            None => queue.push(update),
        }
    }

    async fn pending_updates(&self, username: &Name) -> Vec<PendingUpdate> {
        let pending = self.pending.lock().await;
        pending.get(username).cloned().unwrap_or_default()
    }

    async fn acknowledge_update(
        &self,
        username: &Name,
        update: &PendingUpdate,
    ) -> Result<(), RepositoryError> {
        let mut pending = self.pending.lock().await;
        let not_found = || RepositoryError::PendingUpdateNotFound {
            username: username.clone(),
            channel_id: update.channel_id,
        };

        let queue = pending.get_mut(username).ok_or_else(not_found)?;
        let position = queue.iter().position(|u| u == update).ok_or_else(not_found)?;
        queue.remove(position);
        if queue.is_empty() {
            pending.remove(username);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChannelIdFactory, Timestamp};

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemoryChannelRepository のチャンネル保存・取得
    // - 未配信更新のキューイング・確認応答
    //
    // 【なぜこのテストが必要か】
    // - 同期処理は未配信更新キューの正しさに依存する
    // - 配信中に新しい更新が来ても失われないことを保証する
    // ========================================

    fn name(raw: &str) -> Name {
        Name::new(raw).unwrap()
    }

    fn channel(raw_name: &str, created_at: i64) -> Channel {
        Channel::new(
            ChannelIdFactory::generate(),
            name(raw_name),
            vec![name("anna")],
            name("paul"),
            Timestamp::new(created_at),
        )
    }

    #[tokio::test]
    async fn test_save_and_get_channel() {
        // テスト項目: 保存したチャンネルを ID で取得できる
        // given (前提条件):
        let repo = InMemoryChannelRepository::new();
        let coders = channel("Coders", 1000);

        // when (操作):
        repo.save_channel(coders.clone()).await;
        let result = repo.get_channel(&coders.id).await;

        // then (期待する結果):
        assert_eq!(result, Ok(coders));
    }

    #[tokio::test]
    async fn test_get_unknown_channel_fails() {
        // テスト項目: 存在しないチャンネルの取得はエラーになる
        // given (前提条件):
        let repo = InMemoryChannelRepository::new();
        let id = ChannelIdFactory::generate();

        // when (操作):
        let result = repo.get_channel(&id).await;

        // then (期待する結果):
        assert_eq!(result, Err(RepositoryError::ChannelNotFound(id)));
    }

    #[tokio::test]
    async fn test_list_channels_oldest_first() {
        // テスト項目: チャンネル一覧は作成日時の古い順
        // given (前提条件):
        let repo = InMemoryChannelRepository::new();
        repo.save_channel(channel("Newer", 2000)).await;
        repo.save_channel(channel("Older", 1000)).await;

        // when (操作):
        let list = repo.list_channels().await;

        // then (期待する結果):
        let names: Vec<&str> = list.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Older", "Newer"]);
    }

    #[tokio::test]
    async fn test_queue_update_replaces_same_channel() {
        // テスト項目: 同じチャンネルの更新は最新のもので置き換えられ、順序は維持される
        // given (前提条件):
        let repo = InMemoryChannelRepository::new();
        let paul = name("paul");
        let first = ChannelIdFactory::generate();
        let second = ChannelIdFactory::generate();

        // when (操作):
        repo.queue_update(&paul, PendingUpdate::new(first, name("Coders")))
            .await;
        repo.queue_update(&paul, PendingUpdate::new(second, name("Anna")))
            .await;
        repo.queue_update(&paul, PendingUpdate::new(first, name("Book readers")))
            .await;

        // then (期待する結果):
        assert_eq!(
            repo.pending_updates(&paul).await,
            vec![
                PendingUpdate::new(first, name("Book readers")),
                PendingUpdate::new(second, name("Anna")),
            ]
        );
        assert!(repo.pending_updates(&name("anna")).await.is_empty());
    }

    #[tokio::test]
    async fn test_acknowledge_update_removes_it() {
        // テスト項目: 確認応答した更新はキューから削除される
        // given (前提条件):
        let repo = InMemoryChannelRepository::new();
        let paul = name("paul");
        let update = PendingUpdate::new(ChannelIdFactory::generate(), name("Coders"));
        repo.queue_update(&paul, update.clone()).await;

        // when (操作):
        let result = repo.acknowledge_update(&paul, &update).await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert!(repo.pending_updates(&paul).await.is_empty());
    }

    #[tokio::test]
    async fn test_acknowledge_stale_update_keeps_newer_one() {
        // テスト項目: 配信後に新しい更新が来ていた場合、古い更新の確認応答では削除されない
        // given (前提条件):
        let repo = InMemoryChannelRepository::new();
        let paul = name("paul");
        let channel_id = ChannelIdFactory::generate();
        let delivered = PendingUpdate::new(channel_id, name("Coders"));
        let newer = PendingUpdate::new(channel_id, name("Rustaceans"));
        repo.queue_update(&paul, delivered.clone()).await;
        repo.queue_update(&paul, newer.clone()).await;

        // when (操作):
        let result = repo.acknowledge_update(&paul, &delivered).await;

        // then (期待する結果):
        assert!(matches!(
            result,
            Err(RepositoryError::PendingUpdateNotFound { .. })
        ));
        assert_eq!(repo.pending_updates(&paul).await, vec![newer]);
    }
}
