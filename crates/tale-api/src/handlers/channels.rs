//! Channel handlers
//!
//! Endpoints for channel listing and management.

use axum::{extract::State, Json};
use tale_service::dto::{
    ChannelListQuery, ChannelResponse, CreateChannelRequest, PublicUserResponse,
    UpdateChannelRequest,
};
use tale_service::ChannelService;

use crate::extractors::{AuthUser, IdPath, ListQuery, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List channels at the requested level (`visible`, `owner` or `member`)
///
/// GET /channels?level=
pub async fn list_channels(
    State(state): State<AppState>,
    auth: AuthUser,
    ListQuery(query): ListQuery<ChannelListQuery>,
) -> ApiResult<Json<Vec<ChannelResponse>>> {
    let level = query.level()?;
    let service = ChannelService::new(state.service_context());
    let channels = service.list_channels(auth.user_id, level).await?;
    Ok(Json(channels))
}

/// Create channel owned by the caller
///
/// POST /channels
pub async fn create_channel(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateChannelRequest>,
) -> ApiResult<Created<Json<ChannelResponse>>> {
    let service = ChannelService::new(state.service_context());
    let response = service.create_channel(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Get channel by ID
///
/// GET /channels/{channel_id}
pub async fn get_channel(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(channel_id): IdPath,
) -> ApiResult<Json<ChannelResponse>> {
    let service = ChannelService::new(state.service_context());
    let response = service.get_channel(auth.user_id, channel_id).await?;
    Ok(Json(response))
}

/// Update channel
///
/// PUT /channels/{channel_id}
pub async fn update_channel(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(channel_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateChannelRequest>,
) -> ApiResult<Json<ChannelResponse>> {
    let service = ChannelService::new(state.service_context());
    let response = service
        .update_channel(auth.user_id, channel_id, request)
        .await?;
    Ok(Json(response))
}

/// Delete channel along with its characters and messages
///
/// DELETE /channels/{channel_id}
pub async fn delete_channel(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(channel_id): IdPath,
) -> ApiResult<NoContent> {
    let service = ChannelService::new(state.service_context());
    service.delete_channel(auth.user_id, channel_id).await?;
    Ok(NoContent)
}

/// Users with a character in the channel
///
/// GET /channels/{channel_id}/users
pub async fn list_channel_users(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(channel_id): IdPath,
) -> ApiResult<Json<Vec<PublicUserResponse>>> {
    let service = ChannelService::new(state.service_context());
    let users = service.list_channel_users(auth.user_id, channel_id).await?;
    Ok(Json(users))
}
