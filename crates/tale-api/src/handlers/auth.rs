//! Authentication handlers
//!
//! Sign-in goes through an external identity provider; only the token
//! refresh is served here.

use axum::{extract::State, Json};
use tale_service::dto::{AuthResponse, RefreshTokenRequest};
use tale_service::AuthService;

use crate::response::ApiResult;
use crate::state::AppState;

/// Refresh access token
///
/// POST /auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh(request).await?;
    Ok(Json(response))
}
