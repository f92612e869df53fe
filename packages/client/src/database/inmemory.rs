//! InMemory Database 実装

use std::collections::BTreeMap;

use async_trait::async_trait;
use roji_shared::Name;
use tokio::sync::Mutex;

use super::{ChannelConfig, Database, DatabaseError};

/// インメモリ Database 実装（テスト・一時セッション用）
#[derive(Default)]
pub struct InMemoryDatabase {
    channels: Mutex<BTreeMap<Name, ChannelConfig>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Database for InMemoryDatabase {
    async fn save_channel(&self, name: Name, config: ChannelConfig) -> Result<(), DatabaseError> {
        let mut channels = self.channels.lock().await;
        channels.insert(name, config);
        Ok(())
    }

    async fn list_channels(&self) -> Result<Vec<(Name, ChannelConfig)>, DatabaseError> {
        let channels = self.channels.lock().await;
        Ok(channels
            .iter()
            .map(|(name, config)| (name.clone(), *config))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roji_shared::ChannelIdFactory;

    #[tokio::test]
    async fn test_save_channel_is_idempotent() {
        // テスト項目: 同じ内容を2回保存しても1回保存した状態と同じ
        // given (前提条件):
        let database = InMemoryDatabase::new();
        let name = Name::new("Coders").unwrap();
        let config = ChannelConfig::new(ChannelIdFactory::generate());

        // when (操作):
        database.save_channel(name.clone(), config).await.unwrap();
        database.save_channel(name.clone(), config).await.unwrap();

        // then (期待する結果):
        assert_eq!(database.list_channels().await.unwrap(), vec![(name, config)]);
    }

    #[tokio::test]
    async fn test_save_channel_overwrites_by_name() {
        // テスト項目: 同じ名前で保存すると上書きされる
        // given (前提条件):
        let database = InMemoryDatabase::new();
        let name = Name::new("Coders").unwrap();
        let old = ChannelConfig::new(ChannelIdFactory::generate());
        let new = ChannelConfig::new(ChannelIdFactory::generate());

        // when (操作):
        database.save_channel(name.clone(), old).await.unwrap();
        database.save_channel(name.clone(), new).await.unwrap();

        // then (期待する結果):
        assert_eq!(database.list_channels().await.unwrap(), vec![(name, new)]);
    }
}
