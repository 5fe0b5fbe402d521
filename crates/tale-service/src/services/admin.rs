//! Admin service
//!
//! Administrators bypass ownership and membership for reads and moderation.
//! User moderation goes through [`tale_core::can_moderate_user`], so admins
//! can never update, ban or delete another admin (or themselves) here.

use tale_core::entities::MessageKind;
use tale_core::{can_moderate_user, DomainError, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{
    AdminUpdateUserRequest, ChannelResponse, CharacterResponse, MessageResponse,
    UpdateChannelRequest, UpdateCharacterRequest, UpdateMessageRequest, UserResponse,
};

use super::channel::apply_channel_update;
use super::character::apply_character_update;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Admin service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn permissions(&self) -> PermissionService<'a> {
        PermissionService::new(self.ctx)
    }

    // ========================================================================
    // Users
    // ========================================================================

    #[instrument(skip(self))]
    pub async fn list_users(&self, admin_id: Snowflake) -> ServiceResult<Vec<UserResponse>> {
        self.permissions().require_admin(admin_id).await?;
        let users = self.ctx.user_repo().find_all().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_user(
        &self,
        admin_id: Snowflake,
        target_id: Snowflake,
    ) -> ServiceResult<UserResponse> {
        let perms = self.permissions();
        perms.require_admin(admin_id).await?;
        Ok(UserResponse::from(&perms.user(target_id).await?))
    }

    /// Update or ban/unban a non-admin user
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        admin_id: Snowflake,
        target_id: Snowflake,
        request: AdminUpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let perms = self.permissions();
        let admin = perms.require_admin(admin_id).await?;
        let mut target = perms.user(target_id).await?;

        if !can_moderate_user(&admin, &target) {
            warn!(admin_id = %admin_id, target_id = %target_id, "Refused to moderate admin");
            return Err(DomainError::CannotModerateAdmin.into());
        }

        if let Some(username) = request.username {
            target.set_username(username);
        }
        if let Some(bio) = request.bio {
            target.set_bio(bio);
        }
        if let Some(is_banned) = request.is_banned {
            target.set_banned(is_banned);
        }
        self.ctx.user_repo().update(&target).await?;

        info!(admin_id = %admin_id, target_id = %target_id, banned = target.is_banned, "User moderated");

        Ok(UserResponse::from(&target))
    }

    /// Delete a non-admin user with everything it owns
    #[instrument(skip(self))]
    pub async fn delete_user(&self, admin_id: Snowflake, target_id: Snowflake) -> ServiceResult<()> {
        let perms = self.permissions();
        let admin = perms.require_admin(admin_id).await?;
        let target = perms.user(target_id).await?;

        if !can_moderate_user(&admin, &target) {
            warn!(admin_id = %admin_id, target_id = %target_id, "Refused to delete admin");
            return Err(DomainError::CannotModerateAdmin.into());
        }

        self.ctx.cascade_repo().delete_user_cascade(target_id).await?;

        info!(admin_id = %admin_id, target_id = %target_id, "User deleted by admin");

        Ok(())
    }

    // ========================================================================
    // Channels
    // ========================================================================

    #[instrument(skip(self))]
    pub async fn list_channels(&self, admin_id: Snowflake) -> ServiceResult<Vec<ChannelResponse>> {
        self.permissions().require_admin(admin_id).await?;
        let channels = self.ctx.channel_repo().find_all(None).await?;
        Ok(channels.iter().map(ChannelResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_channel(
        &self,
        admin_id: Snowflake,
        channel_id: Snowflake,
    ) -> ServiceResult<ChannelResponse> {
        let perms = self.permissions();
        perms.require_admin(admin_id).await?;
        Ok(ChannelResponse::from(&perms.channel(channel_id).await?))
    }

    #[instrument(skip(self, request))]
    pub async fn update_channel(
        &self,
        admin_id: Snowflake,
        channel_id: Snowflake,
        request: UpdateChannelRequest,
    ) -> ServiceResult<ChannelResponse> {
        let perms = self.permissions();
        perms.require_admin(admin_id).await?;
        let mut channel = perms.channel(channel_id).await?;

        apply_channel_update(&mut channel, request);
        self.ctx.channel_repo().update(&channel).await?;

        info!(admin_id = %admin_id, channel_id = %channel_id, "Channel updated by admin");

        Ok(ChannelResponse::from(&channel))
    }

    #[instrument(skip(self))]
    pub async fn delete_channel(&self, admin_id: Snowflake, channel_id: Snowflake) -> ServiceResult<()> {
        self.permissions().require_admin(admin_id).await?;
        self.ctx.cascade_repo().delete_channel_cascade(channel_id).await?;

        info!(admin_id = %admin_id, channel_id = %channel_id, "Channel deleted by admin");

        Ok(())
    }

    // ========================================================================
    // Messages
    // ========================================================================

    #[instrument(skip(self))]
    pub async fn list_messages(
        &self,
        admin_id: Snowflake,
        channel_id: Snowflake,
        kind: Option<MessageKind>,
    ) -> ServiceResult<Vec<MessageResponse>> {
        let perms = self.permissions();
        perms.require_admin(admin_id).await?;
        perms.channel(channel_id).await?;

        let messages = self
            .ctx
            .message_repo()
            .find_by_channel(channel_id, kind)
            .await?;
        Ok(messages.iter().map(MessageResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_message(
        &self,
        admin_id: Snowflake,
        message_id: Snowflake,
    ) -> ServiceResult<MessageResponse> {
        let perms = self.permissions();
        perms.require_admin(admin_id).await?;
        Ok(MessageResponse::from(&perms.message(message_id).await?))
    }

    #[instrument(skip(self, request))]
    pub async fn update_message(
        &self,
        admin_id: Snowflake,
        message_id: Snowflake,
        request: UpdateMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        let perms = self.permissions();
        perms.require_admin(admin_id).await?;
        let mut message = perms.message(message_id).await?;

        if request.content.trim().is_empty() {
            return Err(DomainError::EmptyContent.into());
        }
        message.edit(request.content);
        self.ctx.message_repo().update(&message).await?;

        info!(admin_id = %admin_id, message_id = %message_id, "Message updated by admin");

        Ok(MessageResponse::from(&message))
    }

    #[instrument(skip(self))]
    pub async fn delete_message(&self, admin_id: Snowflake, message_id: Snowflake) -> ServiceResult<()> {
        self.permissions().require_admin(admin_id).await?;
        self.ctx.message_repo().delete(message_id).await?;

        info!(admin_id = %admin_id, message_id = %message_id, "Message deleted by admin");

        Ok(())
    }

    // ========================================================================
    // Characters
    // ========================================================================

    #[instrument(skip(self))]
    pub async fn list_characters(
        &self,
        admin_id: Snowflake,
        channel_id: Snowflake,
    ) -> ServiceResult<Vec<CharacterResponse>> {
        let perms = self.permissions();
        perms.require_admin(admin_id).await?;
        perms.channel(channel_id).await?;

        let characters = self.ctx.character_repo().find_by_channel(channel_id).await?;
        Ok(characters.iter().map(CharacterResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_character(
        &self,
        admin_id: Snowflake,
        character_id: Snowflake,
    ) -> ServiceResult<CharacterResponse> {
        let perms = self.permissions();
        perms.require_admin(admin_id).await?;
        Ok(CharacterResponse::from(&perms.character(character_id).await?))
    }

    #[instrument(skip(self, request))]
    pub async fn update_character(
        &self,
        admin_id: Snowflake,
        character_id: Snowflake,
        request: UpdateCharacterRequest,
    ) -> ServiceResult<CharacterResponse> {
        let perms = self.permissions();
        perms.require_admin(admin_id).await?;
        let mut character = perms.character(character_id).await?;

        apply_character_update(&mut character, request)?;
        self.ctx.character_repo().update(&character).await?;

        info!(admin_id = %admin_id, character_id = %character_id, "Character updated by admin");

        Ok(CharacterResponse::from(&character))
    }

    #[instrument(skip(self))]
    pub async fn delete_character(
        &self,
        admin_id: Snowflake,
        character_id: Snowflake,
    ) -> ServiceResult<()> {
        self.permissions().require_admin(admin_id).await?;
        self.ctx
            .cascade_repo()
            .delete_character_cascade(character_id)
            .await?;

        info!(admin_id = %admin_id, character_id = %character_id, "Character deleted by admin");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::TestWorld;

    #[tokio::test]
    async fn test_non_admin_refused() {
        let world = TestWorld::new();
        let user = world.user("user").await;
        let service = AdminService::new(&world.ctx);

        let err = service.list_users(user.id).await.unwrap_err();
        assert_eq!(err.error_code(), "ADMIN_REQUIRED");
        let err = service.list_channels(user.id).await.unwrap_err();
        assert!(err.is_forbidden());
    }

    #[tokio::test]
    async fn test_admin_deletes_user_with_cascade() {
        let world = TestWorld::new();
        let admin = world.admin("admin").await;
        let owner = world.user("owner").await;
        let target = world.user("target").await;
        let channel = world.channel(&owner, true).await;
        let character = world.character(&channel, &target, "Villain").await;
        let message = world.message(&character, "Muahaha", MessageKind::Story).await;

        AdminService::new(&world.ctx)
            .delete_user(admin.id, target.id)
            .await
            .unwrap();

        let ctx = &world.ctx;
        assert!(world.fetch_user(target.id).await.is_none());
        assert!(ctx.character_repo().find_by_id(character.id).await.unwrap().is_none());
        assert!(ctx.message_repo().find_by_id(message.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_admin_cannot_moderate_admins() {
        let world = TestWorld::new();
        let admin = world.admin("admin").await;
        let peer = world.admin("peer").await;
        let service = AdminService::new(&world.ctx);

        let err = service.delete_user(admin.id, peer.id).await.unwrap_err();
        assert_eq!(err.error_code(), "CANNOT_MODERATE_ADMIN");
        let err = service.delete_user(admin.id, admin.id).await.unwrap_err();
        assert!(err.is_forbidden());

        let ban = AdminUpdateUserRequest {
            is_banned: Some(true),
            ..Default::default()
        };
        let err = service
            .update_user(admin.id, peer.id, ban.clone())
            .await
            .unwrap_err();
        assert!(err.is_forbidden());
        let err = service.update_user(admin.id, admin.id, ban).await.unwrap_err();
        assert!(err.is_forbidden());

        // Nothing changed
        let stored = world.fetch_user(peer.id).await.unwrap();
        assert!(!stored.is_banned);
        assert!(world.fetch_user(admin.id).await.is_some());

        // Reading another admin is still allowed
        assert!(service.get_user(admin.id, peer.id).await.unwrap().is_admin);
    }

    #[tokio::test]
    async fn test_ban_locks_user_out() {
        let world = TestWorld::new();
        let admin = world.admin("admin").await;
        let user = world.user("user").await;
        let channel = world.channel(&user, false).await;
        let service = AdminService::new(&world.ctx);

        let banned = service
            .update_user(
                admin.id,
                user.id,
                AdminUpdateUserRequest {
                    is_banned: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(banned.is_banned);

        let err = crate::services::ChannelService::new(&world.ctx)
            .get_channel(user.id, channel.id)
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "USER_BANNED");

        let unbanned = service
            .update_user(
                admin.id,
                user.id,
                AdminUpdateUserRequest {
                    is_banned: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(!unbanned.is_banned);
    }

    #[tokio::test]
    async fn test_admin_reads_private_content() {
        let world = TestWorld::new();
        let admin = world.admin("admin").await;
        let owner = world.user("owner").await;
        let channel = world.channel(&owner, true).await;
        let character = world.character(&channel, &owner, "Lich").await;
        let meta = world.message(&character, "ooc: tea", MessageKind::Meta).await;
        let service = AdminService::new(&world.ctx);

        assert_eq!(service.list_channels(admin.id).await.unwrap().len(), 1);
        assert_eq!(
            service.get_message(admin.id, meta.id).await.unwrap().content,
            "ooc: tea"
        );
        assert_eq!(
            service.list_characters(admin.id, channel.id).await.unwrap().len(),
            1
        );
        let metas = service
            .list_messages(admin.id, channel.id, Some(MessageKind::Meta))
            .await
            .unwrap();
        assert_eq!(metas.len(), 1);

        service.delete_channel(admin.id, channel.id).await.unwrap();
        let err = service.get_channel(admin.id, channel.id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_admin_edits_content() {
        let world = TestWorld::new();
        let admin = world.admin("admin").await;
        let owner = world.user("owner").await;
        let channel = world.channel(&owner, false).await;
        let character = world.character(&channel, &owner, "Troll").await;
        let message = world.message(&character, "spam spam", MessageKind::Meta).await;
        let service = AdminService::new(&world.ctx);

        let edited = service
            .update_message(
                admin.id,
                message.id,
                UpdateMessageRequest {
                    content: "[removed]".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(edited.content, "[removed]");

        let renamed = service
            .update_character(
                admin.id,
                character.id,
                UpdateCharacterRequest {
                    name: Some("Reformed Troll".to_string()),
                    description: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(renamed.name, "Reformed Troll");

        service.delete_message(admin.id, message.id).await.unwrap();
        service.delete_character(admin.id, character.id).await.unwrap();
        let err = service.get_character(admin.id, character.id).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
