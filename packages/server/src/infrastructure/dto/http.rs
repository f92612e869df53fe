//! HTTP API response DTOs for the sync server.

use serde::{Deserialize, Serialize};

/// Channel summary for list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelSummaryDto {
    pub id: String,
    pub name: String,
    pub declared_by: String,
    pub members: Vec<String>,
    pub created_at: String, // ISO 8601
}
