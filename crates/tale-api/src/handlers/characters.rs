//! Character handlers

use axum::{extract::State, Json};
use tale_service::dto::{CharacterResponse, CreateCharacterRequest, UpdateCharacterRequest};
use tale_service::CharacterService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /channels/{channel_id}/characters
pub async fn list_characters(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(channel_id): IdPath,
) -> ApiResult<Json<Vec<CharacterResponse>>> {
    let service = CharacterService::new(state.service_context());
    let characters = service.list_characters(auth.user_id, channel_id).await?;
    Ok(Json(characters))
}

/// Assign a character to a user; channel owner only
///
/// POST /channels/{channel_id}/characters
pub async fn create_character(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(channel_id): IdPath,
    ValidatedJson(request): ValidatedJson<CreateCharacterRequest>,
) -> ApiResult<Created<Json<CharacterResponse>>> {
    let service = CharacterService::new(state.service_context());
    let response = service
        .create_character(auth.user_id, channel_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// GET /characters/{character_id}
pub async fn get_character(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(character_id): IdPath,
) -> ApiResult<Json<CharacterResponse>> {
    let service = CharacterService::new(state.service_context());
    let response = service.get_character(auth.user_id, character_id).await?;
    Ok(Json(response))
}

/// PUT /characters/{character_id}
pub async fn update_character(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(character_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateCharacterRequest>,
) -> ApiResult<Json<CharacterResponse>> {
    let service = CharacterService::new(state.service_context());
    let response = service
        .update_character(auth.user_id, character_id, request)
        .await?;
    Ok(Json(response))
}

/// Delete character and the messages written as it
///
/// DELETE /characters/{character_id}
pub async fn delete_character(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(character_id): IdPath,
) -> ApiResult<NoContent> {
    let service = CharacterService::new(state.service_context());
    service.delete_character(auth.user_id, character_id).await?;
    Ok(NoContent)
}
