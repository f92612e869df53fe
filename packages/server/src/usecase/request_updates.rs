//! UseCase: 更新要求処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RequestUpdatesUseCase::execute() / acknowledge() メソッド
//!
//! ### なぜこのテストが必要か
//! - 未配信の更新だけが配信され、配信済みの更新が再送されないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：未配信更新の取得と確認応答
//! - エッジケース：未配信更新なし、二重の確認応答

use std::sync::Arc;

use crate::domain::{ChannelRepository, Name, PendingUpdate};

/// 更新要求のユースケース
pub struct RequestUpdatesUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChannelRepository>,
}

impl RequestUpdatesUseCase {
    /// 新しい RequestUpdatesUseCase を作成
    pub fn new(repository: Arc<dyn ChannelRepository>) -> Self {
        Self { repository }
    }

    /// ユーザーの未配信更新を取得
    ///
    /// 取得しただけでは削除されません。配信後に [`acknowledge`](Self::acknowledge) を呼びます。
    pub async fn execute(&self, username: &Name) -> Vec<PendingUpdate> {
        let updates = self.repository.pending_updates(username).await;
        tracing::debug!(
            "Read {} pending update(s) for user '{}'",
            updates.len(),
            username
        );
        updates
    }

    /// 配信済みの更新をキューから削除
    ///
    /// 既に削除済み、または新しい更新で置き換えられていた場合は何もしません。
    pub async fn acknowledge(&self, username: &Name, update: &PendingUpdate) {
        if let Err(e) = self.repository.acknowledge_update(username, update).await {
            tracing::debug!("Update was not removed after delivery: {}", e);
        }
    }
}
