//! Public handlers
//!
//! Unauthenticated, read-only view of public channels.

use axum::{extract::State, Json};
use tale_service::dto::{ChannelResponse, MessageResponse};
use tale_service::PublicService;

use crate::extractors::IdPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /public/channels
pub async fn list_channels(State(state): State<AppState>) -> ApiResult<Json<Vec<ChannelResponse>>> {
    let service = PublicService::new(state.service_context());
    Ok(Json(service.list_channels().await?))
}

/// GET /public/channels/{channel_id}
pub async fn get_channel(
    State(state): State<AppState>,
    IdPath(channel_id): IdPath,
) -> ApiResult<Json<ChannelResponse>> {
    let service = PublicService::new(state.service_context());
    Ok(Json(service.get_channel(channel_id).await?))
}

/// Story messages only
///
/// GET /public/channels/{channel_id}/messages
pub async fn list_messages(
    State(state): State<AppState>,
    IdPath(channel_id): IdPath,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let service = PublicService::new(state.service_context());
    Ok(Json(service.list_messages(channel_id).await?))
}
