//! Bot handlers
//!
//! Endpoints for bot registration and client credentials.

use axum::{extract::State, Json};
use tale_service::dto::{
    BotCreatedResponse, BotCredentialsResponse, BotResponse, CreateBotRequest, UpdateBotRequest,
};
use tale_service::BotService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /bots
pub async fn list_bots(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<BotResponse>>> {
    let service = BotService::new(state.service_context());
    let bots = service.list_bots(auth.user_id).await?;
    Ok(Json(bots))
}

/// Register a bot; the response is the only time the secret is returned unasked
///
/// POST /bots
pub async fn create_bot(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateBotRequest>,
) -> ApiResult<Created<Json<BotCreatedResponse>>> {
    let service = BotService::new(state.service_context());
    let response = service.create_bot(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// GET /bots/{bot_id}
pub async fn get_bot(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(bot_id): IdPath,
) -> ApiResult<Json<BotResponse>> {
    let service = BotService::new(state.service_context());
    let response = service.get_bot(auth.user_id, bot_id).await?;
    Ok(Json(response))
}

/// PUT /bots/{bot_id}
pub async fn update_bot(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(bot_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateBotRequest>,
) -> ApiResult<Json<BotResponse>> {
    let service = BotService::new(state.service_context());
    let response = service.update_bot(auth.user_id, bot_id, request).await?;
    Ok(Json(response))
}

/// DELETE /bots/{bot_id}
pub async fn delete_bot(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(bot_id): IdPath,
) -> ApiResult<NoContent> {
    let service = BotService::new(state.service_context());
    service.delete_bot(auth.user_id, bot_id).await?;
    Ok(NoContent)
}

/// GET /bots/{bot_id}/creds
pub async fn get_credentials(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(bot_id): IdPath,
) -> ApiResult<Json<BotCredentialsResponse>> {
    let service = BotService::new(state.service_context());
    let response = service.get_credentials(auth.user_id, bot_id).await?;
    Ok(Json(response))
}

/// Issue a new client id and secret
///
/// POST /bots/{bot_id}/creds
pub async fn rotate_credentials(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(bot_id): IdPath,
) -> ApiResult<Json<BotCredentialsResponse>> {
    let service = BotService::new(state.service_context());
    let response = service.rotate_credentials(auth.user_id, bot_id).await?;
    Ok(Json(response))
}
