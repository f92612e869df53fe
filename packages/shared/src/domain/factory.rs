//! Domain factories for creating value objects.

use super::ChannelId;

/// Factory for generating ChannelId instances.
///
/// This factory encapsulates the logic for generating new channel identifiers,
/// separating the generation concern from the parsing logic in ChannelId.
pub struct ChannelIdFactory;

impl ChannelIdFactory {
    /// Generate a new ChannelId with a random UUID v4.
    pub fn generate() -> ChannelId {
        ChannelId::from_uuid(uuid::Uuid::new_v4())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_id_factory_generate() {
        // テスト項目: ChannelIdFactory::generate() で UUID v4 形式の ChannelId を生成できる
        // when (操作):
        let channel_id = ChannelIdFactory::generate();

        // then (期待する結果):
        assert_eq!(channel_id.to_string().len(), 36); // UUID v4 の標準長（ハイフン含む）
        assert_eq!(channel_id.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn test_channel_id_factory_generate_uniqueness() {
        // テスト項目: ChannelIdFactory::generate() は毎回異なる ID を生成する
        // when (操作):
        let channel_id1 = ChannelIdFactory::generate();
        let channel_id2 = ChannelIdFactory::generate();

        // then (期待する結果):
        assert_ne!(channel_id1, channel_id2);
    }
}
