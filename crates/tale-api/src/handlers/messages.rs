//! Message handlers
//!
//! Endpoints for reading and writing channel messages.

use axum::{extract::State, Json};
use tale_service::dto::{
    CreateMessageRequest, MessageListQuery, MessageResponse, UpdateMessageRequest,
};
use tale_service::MessageService;

use crate::extractors::{AuthUser, IdPath, ListQuery, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Get channel messages, optionally filtered by `msg_type` (`story` or `meta`)
///
/// GET /channels/{channel_id}/messages
pub async fn list_messages(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(channel_id): IdPath,
    ListQuery(query): ListQuery<MessageListQuery>,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let kind = query.kind()?;
    let service = MessageService::new(state.service_context());
    let messages = service.list_messages(auth.user_id, channel_id, kind).await?;
    Ok(Json(messages))
}

/// Post a message as one of the caller's characters
///
/// POST /channels/{channel_id}/messages
pub async fn create_message(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(channel_id): IdPath,
    ValidatedJson(request): ValidatedJson<CreateMessageRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let response = service
        .create_message(auth.user_id, channel_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Get message by ID
///
/// GET /messages/{message_id}
pub async fn get_message(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(message_id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    let service = MessageService::new(state.service_context());
    let response = service.get_message(auth.user_id, message_id).await?;
    Ok(Json(response))
}

/// Edit message content
///
/// PUT /messages/{message_id}
pub async fn update_message(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(message_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateMessageRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = MessageService::new(state.service_context());
    let response = service
        .update_message(auth.user_id, message_id, request)
        .await?;
    Ok(Json(response))
}

/// Delete message
///
/// DELETE /messages/{message_id}
pub async fn delete_message(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(message_id): IdPath,
) -> ApiResult<NoContent> {
    let service = MessageService::new(state.service_context());
    service.delete_message(auth.user_id, message_id).await?;
    Ok(NoContent)
}
