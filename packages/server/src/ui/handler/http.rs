//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};
use roji_shared::time::timestamp_to_jst_rfc3339;

use crate::{infrastructure::dto::http::ChannelSummaryDto, ui::state::AppState};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get list of channels (oldest first)
pub async fn get_channels(State(state): State<Arc<AppState>>) -> Json<Vec<ChannelSummaryDto>> {
    let channels = state.repository.list_channels().await;

    let summaries = channels
        .into_iter()
        .map(|channel| ChannelSummaryDto {
            id: channel.id.to_string(),
            name: channel.name.into_string(),
            declared_by: channel.declared_by.into_string(),
            members: channel
                .members
                .into_iter()
                .map(|member| member.into_string())
                .collect(),
            created_at: timestamp_to_jst_rfc3339(channel.created_at),
        })
        .collect();

    Json(summaries)
}
