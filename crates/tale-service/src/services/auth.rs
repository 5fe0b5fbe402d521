//! Authentication service
//!
//! Turns an identity already verified by an external provider into a local
//! account and a token pair, and refreshes token pairs. The provider
//! handshake itself happens elsewhere.

use tale_core::entities::User;
use tale_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, ExternalProfile, RefreshTokenRequest, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Sign in with an externally verified profile, creating the user on first visit
    #[instrument(skip(self, profile), fields(email = %profile.email))]
    pub async fn sign_in(&self, profile: ExternalProfile) -> ServiceResult<AuthResponse> {
        let repo = self.ctx.user_repo();

        let mut user = match repo.find_by_email(&profile.email).await? {
            Some(user) => user,
            None => {
                let user = User::new(self.ctx.generate_id(), profile.username, profile.email);
                repo.create(&user).await?;
                info!(user_id = %user.id, "User registered");
                user
            }
        };

        if user.is_banned {
            warn!(user_id = %user.id, "Sign-in refused for banned user");
            return Err(DomainError::UserBanned.into());
        }

        repo.update_last_login(user.id).await?;
        user.touch_login();

        info!(user_id = %user.id, "User signed in");

        self.issue(&user)
    }

    /// Exchange a refresh token for a fresh token pair
    #[instrument(skip(self, request))]
    pub async fn refresh(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)
            .inspect_err(|e| warn!(error = %e, "Refresh token rejected"))?;
        let user_id: Snowflake = claims.user_id()?;

        let user = PermissionService::new(self.ctx).actor(user_id).await?;

        info!(user_id = %user_id, "Tokens refreshed");

        self.issue(&user)
    }

    fn issue(&self, user: &User) -> ServiceResult<AuthResponse> {
        let pair = self.ctx.jwt_service().generate_token_pair(user.id)?;
        Ok(AuthResponse::new(
            pair.access_token,
            pair.refresh_token,
            pair.expires_in,
            UserResponse::from(user),
        ))
    }
}
