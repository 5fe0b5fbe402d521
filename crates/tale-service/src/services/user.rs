//! User service
//!
//! Self-service access to the caller's own account. Admin moderation of other
//! accounts lives in [`super::admin::AdminService`].

use tale_core::entities::User;
use tale_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve the caller and require that they target themselves
    async fn own_record(&self, user_id: Snowflake, target_id: Snowflake) -> ServiceResult<User> {
        let user = PermissionService::new(self.ctx).actor(user_id).await?;
        if user.id != target_id {
            return Err(DomainError::NotSelf.into());
        }
        Ok(user)
    }

    /// Get the caller's own user record
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Snowflake, target_id: Snowflake) -> ServiceResult<UserResponse> {
        let user = self.own_record(user_id, target_id).await?;
        Ok(UserResponse::from(&user))
    }

    /// Update the caller's username or bio
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self.own_record(user_id, target_id).await?;

        if let Some(username) = request.username {
            user.set_username(username);
        }
        if let Some(bio) = request.bio {
            user.set_bio(bio);
        }
        self.ctx.user_repo().update(&user).await?;

        info!(user_id = %user_id, "User updated");

        Ok(UserResponse::from(&user))
    }

    /// Delete the caller's account with everything it owns
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: Snowflake, target_id: Snowflake) -> ServiceResult<()> {
        let user = self.own_record(user_id, target_id).await?;

        self.ctx.cascade_repo().delete_user_cascade(user.id).await?;

        info!(user_id = %user_id, "User deleted");

        Ok(())
    }
}
