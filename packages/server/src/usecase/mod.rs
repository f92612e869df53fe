//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod error;
pub mod request_updates;
pub mod update_channel;

pub use error::UpdateChannelError;
pub use request_updates::RequestUpdatesUseCase;
pub use update_channel::{UpdateChannelOutcome, UpdateChannelUseCase};
