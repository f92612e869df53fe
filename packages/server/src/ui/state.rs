//! Server state.

use std::sync::Arc;

use crate::domain::ChannelRepository;

/// Shared application state
pub struct AppState {
    /// Repository（データアクセス層の抽象化）
    pub repository: Arc<dyn ChannelRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn ChannelRepository>) -> Self {
        Self { repository }
    }
}
