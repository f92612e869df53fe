//! Client configuration.

use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
    time::Duration,
};

use roji_shared::Name;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default configuration file name, looked up in the working directory.
pub const CLIENT_CONFIG_FILE_NAME: &str = "roji.json";

pub const DEFAULT_USERNAME: &str = "Guest";
pub const DEFAULT_SERVER_HOST: &str = "localhost";
pub const DEFAULT_SERVER_PORT: u16 = 1337;
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 10;

/// Errors raised while loading or saving a [`ClientConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Already initialized: {} exists", .0.display())]
    AlreadyInitialized(PathBuf),
}

/// Settings of one client installation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Identity announced in the login packet
    pub username: Name,
    pub server_host: String,
    pub server_port: u16,
    /// How long to wait for each packet from the server
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,
}

fn default_read_timeout_secs() -> u64 {
    DEFAULT_READ_TIMEOUT_SECS
}

impl ClientConfig {
    /// Configuration used when nothing else is provided: `Guest@localhost:1337`.
    pub fn defaults() -> Self {
        Self {
            username: Name::new(DEFAULT_USERNAME).expect("default username is a valid name"),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            read_timeout_secs: DEFAULT_READ_TIMEOUT_SECS,
        }
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    /// WebSocket endpoint of the configured server.
    pub fn server_url(&self) -> String {
        format!("ws://{}:{}/ws", self.server_host, self.server_port)
    }

    /// Read a configuration file. A missing file is `Ok(None)`.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }

    /// Write the configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let text = self.to_json(path)?;
        std::fs::write(path, text).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Create a new configuration file. An existing file is left untouched
    /// and reported as [`ConfigError::AlreadyInitialized`].
    pub fn init(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let text = self.to_json(path)?;
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(ConfigError::AlreadyInitialized(path.to_path_buf()));
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        file.write_all(text.as_bytes())
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
    }

    fn to_json(&self, path: &Path) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(file: &str) -> PathBuf {
        std::env::temp_dir().join(format!("roji-config-{}-{}", std::process::id(), file))
    }

    #[test]
    fn test_defaults() {
        // テスト項目: デフォルト設定は Guest@localhost:1337
        // when (操作):
        let config = ClientConfig::defaults();

        // then (期待する結果):
        assert_eq!(config.username.as_str(), "Guest");
        assert_eq!(config.server_host, "localhost");
        assert_eq!(config.server_port, 1337);
        assert_eq!(config.read_timeout(), Duration::from_secs(10));
        assert_eq!(config.server_url(), "ws://localhost:1337/ws");
    }

    #[test]
    fn test_load_missing_file_is_none() {
        // テスト項目: 設定ファイルがなければ None が返る
        // when (操作):
        let result = ClientConfig::load(temp_path("missing.json"));

        // then (期待する結果):
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_save_then_load() {
        // テスト項目: 保存した設定を読み込める
        // given (前提条件):
        let path = temp_path("saved.json");
        let config = ClientConfig {
            username: Name::new("paul").unwrap(),
            server_host: "chat.example.org".to_string(),
            server_port: 8080,
            read_timeout_secs: 3,
        };

        // when (操作):
        config.save(&path).unwrap();
        let loaded = ClientConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        // then (期待する結果):
        assert_eq!(loaded, Some(config));
    }

    #[test]
    fn test_init_writes_defaults() {
        // テスト項目: 初期化で設定ファイルが作成され、読み込むと同じ内容になる
        // given (前提条件):
        let path = temp_path("init.json");

        // when (操作):
        let result = ClientConfig::defaults().init(&path);
        let loaded = ClientConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(loaded, Some(ClientConfig::defaults()));
    }

    #[test]
    fn test_init_refuses_existing_file() {
        // テスト項目: 既に設定ファイルがあれば初期化は失敗し、内容は変わらない
        // given (前提条件):
        let path = temp_path("init-existing.json");
        let existing = ClientConfig {
            username: Name::new("anna").unwrap(),
            ..ClientConfig::defaults()
        };
        existing.save(&path).unwrap();

        // when (操作):
        let result = ClientConfig::defaults().init(&path);
        let loaded = ClientConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        // then (期待する結果):
        assert!(matches!(result, Err(ConfigError::AlreadyInitialized(p)) if p == path));
        assert_eq!(loaded, Some(existing));
    }

    #[test]
    fn test_load_without_timeout_uses_default() {
        // テスト項目: read_timeout_secs を省略した設定ファイルはデフォルト値になる
        // given (前提条件):
        let path = temp_path("no-timeout.json");
        std::fs::write(
            &path,
            r#"{"username":"anna","server_host":"localhost","server_port":1337}"#,
        )
        .unwrap();

        // when (操作):
        let loaded = ClientConfig::load(&path).unwrap().unwrap();
        std::fs::remove_file(&path).unwrap();

        // then (期待する結果):
        assert_eq!(loaded.read_timeout_secs, DEFAULT_READ_TIMEOUT_SECS);
    }

    #[test]
    fn test_load_invalid_username_fails() {
        // テスト項目: 不正なユーザー名を含む設定ファイルは読み込めない
        // given (前提条件):
        let path = temp_path("invalid.json");
        std::fs::write(
            &path,
            r#"{"username":"","server_host":"localhost","server_port":1337}"#,
        )
        .unwrap();

        // when (操作):
        let result = ClientConfig::load(&path);
        std::fs::remove_file(&path).unwrap();

        // then (期待する結果):
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
