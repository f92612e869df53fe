//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::RepositoryError;

/// チャンネル作成・更新のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpdateChannelError {
    /// メンバーが1人も指定されていない
    #[error("A channel needs at least one member")]
    NoMembers,

    /// Repository のエラー
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
