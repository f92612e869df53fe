//! JSON file Database 実装
//!
//! 全チャンネルを1つの JSON ファイル（名前 → ChannelConfig）に保存します。
//! ファイルは最初のアクセス時に一度だけ読み込み、以降はメモリ上の内容を正とします。
//! 書き込みは一時ファイル経由の rename で行い、途中で失敗しても元のファイルは壊れません。

use std::{
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use roji_shared::Name;
use tokio::sync::Mutex;

use super::{ChannelConfig, Database, DatabaseError};

/// Default file name inside the client's data directory.
pub const CHANNELS_FILE_NAME: &str = "channels.json";

pub struct JsonFileDatabase {
    path: PathBuf,
    /// File content, loaded on first access
    channels: Mutex<Option<BTreeMap<Name, ChannelConfig>>>,
}

impl JsonFileDatabase {
    /// Use `path` as the backing file. The file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            channels: Mutex::new(None),
        }
    }

    /// Store `channels.json` inside `directory`.
    pub fn in_directory(directory: impl AsRef<Path>) -> Self {
        Self::new(directory.as_ref().join(CHANNELS_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn loaded<'a>(
        &self,
        slot: &'a mut Option<BTreeMap<Name, ChannelConfig>>,
    ) -> Result<&'a mut BTreeMap<Name, ChannelConfig>, DatabaseError> {
        if slot.is_none() {
            *slot = Some(self.read_all().await?);
        }
        Ok(slot.get_or_insert_with(BTreeMap::new))
    }

    async fn read_all(&self) -> Result<BTreeMap<Name, ChannelConfig>, DatabaseError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(io_error(&self.path, e)),
        };
        serde_json::from_slice(&bytes).map_err(|e| DatabaseError::Serialization(e.to_string()))
    }

    async fn write_all(&self, channels: &BTreeMap<Name, ChannelConfig>) -> Result<(), DatabaseError> {
        let bytes = serde_json::to_vec_pretty(channels)
            .map_err(|e| DatabaseError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error(parent, e))?;
        }

        let temp = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp, bytes)
            .await
            .map_err(|e| io_error(&temp, e))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|e| io_error(&self.path, e))
    }
}

fn io_error(path: &Path, error: io::Error) -> DatabaseError {
    DatabaseError::Io(format!("{}: {}", path.display(), error))
}

#[async_trait]
impl Database for JsonFileDatabase {
    async fn save_channel(&self, name: Name, config: ChannelConfig) -> Result<(), DatabaseError> {
        let mut guard = self.channels.lock().await;
        let channels = self.loaded(&mut guard).await?;
        if channels.get(&name) == Some(&config) {
            return Ok(());
        }

        let mut updated = channels.clone();
        updated.insert(name.clone(), config);
        self.write_all(&updated).await?;
        *channels = updated;

        tracing::debug!("Saved channel '{}' ({}) to {}", name, config.id, self.path.display());
        Ok(())
    }

    async fn list_channels(&self) -> Result<Vec<(Name, ChannelConfig)>, DatabaseError> {
        let mut guard = self.channels.lock().await;
        let channels = self.loaded(&mut guard).await?;
        Ok(channels
            .iter()
            .map(|(name, config)| (name.clone(), *config))
            .collect())
    }
}
