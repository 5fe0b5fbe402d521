//! Authentication extractor
//!
//! Extracts and validates the bearer access token from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use tale_common::AppError;
use tale_core::Snowflake;
use tracing::warn;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated caller extracted from an access token
///
/// Only proves the token is valid. Whether the user still exists or is
/// banned is decided by the service layer.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Snowflake,
}

impl AuthUser {
    pub fn new(user_id: Snowflake) -> Self {
        Self { user_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::App(AppError::MissingAuth))?;

        let app_state = AppState::from_ref(state);

        // Expired and malformed tokens keep their own error codes
        let claims = app_state
            .jwt_service()
            .validate_access_token(bearer.token())
            .inspect_err(|e| warn!(error = %e, "Invalid access token"))?;

        let user_id = claims
            .user_id()
            .inspect_err(|e| warn!(error = %e, "Invalid user ID in token"))?;

        Ok(AuthUser::new(user_id))
    }
}
