//! Administrator handlers
//!
//! Every endpoint requires the caller to be an administrator.

use axum::{extract::State, Json};
use tale_service::dto::{
    AdminUpdateUserRequest, ChannelResponse, CharacterResponse, MessageListQuery,
    MessageResponse, UpdateChannelRequest, UpdateCharacterRequest, UpdateMessageRequest,
    UserResponse,
};
use tale_service::AdminService;

use crate::extractors::{AuthUser, IdPath, ListQuery, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// GET /admin/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.list_users(auth.user_id).await?))
}

/// GET /admin/users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<UserResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.get_user(auth.user_id, user_id).await?))
}

/// Edit a user, including the ban flag; other administrators are off limits
///
/// PUT /admin/users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(user_id): IdPath,
    ValidatedJson(request): ValidatedJson<AdminUpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.update_user(auth.user_id, user_id, request).await?))
}

/// DELETE /admin/users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(user_id): IdPath,
) -> ApiResult<NoContent> {
    let service = AdminService::new(state.service_context());
    service.delete_user(auth.user_id, user_id).await?;
    Ok(NoContent)
}

/// Every channel, private ones included
///
/// GET /admin/channels
pub async fn list_channels(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ChannelResponse>>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.list_channels(auth.user_id).await?))
}

/// GET /admin/channels/{channel_id}
pub async fn get_channel(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(channel_id): IdPath,
) -> ApiResult<Json<ChannelResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.get_channel(auth.user_id, channel_id).await?))
}

/// PUT /admin/channels/{channel_id}
pub async fn update_channel(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(channel_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateChannelRequest>,
) -> ApiResult<Json<ChannelResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(
        service
            .update_channel(auth.user_id, channel_id, request)
            .await?,
    ))
}

/// DELETE /admin/channels/{channel_id}
pub async fn delete_channel(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(channel_id): IdPath,
) -> ApiResult<NoContent> {
    let service = AdminService::new(state.service_context());
    service.delete_channel(auth.user_id, channel_id).await?;
    Ok(NoContent)
}

/// GET /admin/channels/{channel_id}/messages
pub async fn list_messages(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(channel_id): IdPath,
    ListQuery(query): ListQuery<MessageListQuery>,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let kind = query.kind()?;
    let service = AdminService::new(state.service_context());
    Ok(Json(
        service.list_messages(auth.user_id, channel_id, kind).await?,
    ))
}

/// GET /admin/messages/{message_id}
pub async fn get_message(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(message_id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.get_message(auth.user_id, message_id).await?))
}

/// PUT /admin/messages/{message_id}
pub async fn update_message(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(message_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateMessageRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(
        service
            .update_message(auth.user_id, message_id, request)
            .await?,
    ))
}

/// DELETE /admin/messages/{message_id}
pub async fn delete_message(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(message_id): IdPath,
) -> ApiResult<NoContent> {
    let service = AdminService::new(state.service_context());
    service.delete_message(auth.user_id, message_id).await?;
    Ok(NoContent)
}

/// GET /admin/channels/{channel_id}/characters
pub async fn list_characters(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(channel_id): IdPath,
) -> ApiResult<Json<Vec<CharacterResponse>>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.list_characters(auth.user_id, channel_id).await?))
}

/// GET /admin/characters/{character_id}
pub async fn get_character(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(character_id): IdPath,
) -> ApiResult<Json<CharacterResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.get_character(auth.user_id, character_id).await?))
}

/// PUT /admin/characters/{character_id}
pub async fn update_character(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(character_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateCharacterRequest>,
) -> ApiResult<Json<CharacterResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(
        service
            .update_character(auth.user_id, character_id, request)
            .await?,
    ))
}

/// DELETE /admin/characters/{character_id}
pub async fn delete_character(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(character_id): IdPath,
) -> ApiResult<NoContent> {
    let service = AdminService::new(state.service_context());
    service.delete_character(auth.user_id, character_id).await?;
    Ok(NoContent)
}
