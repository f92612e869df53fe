//! UseCase: チャンネル作成・更新処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - UpdateChannelUseCase::execute() メソッド
//! - チャンネルの作成（ID 採番）と再宣言（ID 再利用）、参加者への更新キューイング
//!
//! ### なぜこのテストが必要か
//! - チャンネル ID はリネームしても変わらないことを保証
//! - 作成者を含む全参加者に更新が届くことを確認
//! - プライベートチャンネルの表示名ルールを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規作成、リネーム
//! - 異常系：メンバーなし
//! - エッジケース：未知の ID を指定した再宣言（その ID で作成）

use std::sync::Arc;

use crate::domain::{
    Channel, ChannelId, ChannelIdFactory, ChannelRepository, Name, PendingUpdate, RepositoryError,
};

use super::error::UpdateChannelError;

/// チャンネル作成・更新の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateChannelOutcome {
    /// 作成・更新されたチャンネルの ID
    pub channel_id: ChannelId,
    /// 新規作成された場合 true
    pub created: bool,
    /// 更新がキューイングされたユーザー
    pub notified: Vec<Name>,
}

/// チャンネル作成・更新のユースケース
pub struct UpdateChannelUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChannelRepository>,
}

impl UpdateChannelUseCase {
    /// 新しい UpdateChannelUseCase を作成
    pub fn new(repository: Arc<dyn ChannelRepository>) -> Self {
        Self { repository }
    }

    /// チャンネル作成・更新を実行
    ///
    /// # Arguments
    ///
    /// * `sender` - 要求したユーザー（暗黙のメンバー）
    /// * `channel_id` - `None` なら新規作成、`Some` なら既存チャンネルの再宣言
    /// * `name` - チャンネル名
    /// * `members` - 宣言されたメンバー（送信者は含まない）
    pub async fn execute(
        &self,
        sender: Name,
        channel_id: Option<ChannelId>,
        name: Name,
        members: Vec<Name>,
    ) -> Result<UpdateChannelOutcome, UpdateChannelError> {
        use roji_shared::time::get_jst_timestamp;

        if members.is_empty() {
            return Err(UpdateChannelError::NoMembers);
        }

        // 1. 既存チャンネルなら ID を再利用、なければ作成
        let (channel, created) = match channel_id {
            Some(id) => match self.repository.get_channel(&id).await {
                Ok(mut channel) => {
                    channel.redeclare(name, members, sender);
                    (channel, false)
                }
                Err(RepositoryError::ChannelNotFound(_)) => (
                    Channel::new(id, name, members, sender, get_jst_timestamp()),
                    true,
                ),
                Err(e) => return Err(e.into()),
            },
            None => (
                Channel::new(
                    ChannelIdFactory::generate(),
                    name,
                    members,
                    sender,
                    get_jst_timestamp(),
                ),
                true,
            ),
        };

        self.repository.save_channel(channel.clone()).await;

        // 2. 全参加者に更新をキューイング（表示名は参加者ごと）
        let notified = channel.participants();
        for participant in &notified {
            let update = PendingUpdate::new(channel.id, channel.name_for(participant));
            self.repository.queue_update(participant, update).await;
        }

        tracing::info!(
            "Channel {} '{}' {} by '{}', {} participant(s) notified",
            channel.id,
            channel.name,
            if created { "created" } else { "updated" },
            channel.declared_by,
            notified.len()
        );

        Ok(UpdateChannelOutcome {
            channel_id: channel.id,
            created,
            notified,
        })
    }
}
