//! Permission service
//!
//! Resolves the acting user and answers ownership, membership and visibility
//! questions for the other services. Membership is never cached; every check
//! asks the character repository again.

use tale_common::AppError;
use tale_core::entities::{Bot, Channel, Character, Message, User};
use tale_core::{access, DomainError, Snowflake};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Permission service for access control
pub struct PermissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PermissionService<'a> {
    /// Create a new PermissionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // === Actor resolution ===

    /// Load the authenticated caller.
    ///
    /// A token naming a user that no longer exists is treated as an invalid
    /// token; banned users are refused outright.
    #[instrument(skip(self))]
    pub async fn actor(&self, user_id: Snowflake) -> ServiceResult<User> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::InvalidToken)?;

        if user.is_banned {
            debug!(user_id = %user_id, "Banned user rejected");
            return Err(DomainError::UserBanned.into());
        }
        Ok(user)
    }

    /// Load the caller and require administrator privileges
    #[instrument(skip(self))]
    pub async fn require_admin(&self, user_id: Snowflake) -> ServiceResult<User> {
        let user = self.actor(user_id).await?;
        if !user.is_admin {
            return Err(DomainError::AdminRequired.into());
        }
        Ok(user)
    }

    // === Entity loading ===

    pub async fn user(&self, user_id: Snowflake) -> ServiceResult<User> {
        Ok(self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?)
    }

    pub async fn channel(&self, channel_id: Snowflake) -> ServiceResult<Channel> {
        Ok(self
            .ctx
            .channel_repo()
            .find_by_id(channel_id)
            .await?
            .ok_or(DomainError::ChannelNotFound(channel_id))?)
    }

    pub async fn character(&self, character_id: Snowflake) -> ServiceResult<Character> {
        Ok(self
            .ctx
            .character_repo()
            .find_by_id(character_id)
            .await?
            .ok_or(DomainError::CharacterNotFound(character_id))?)
    }

    pub async fn message(&self, message_id: Snowflake) -> ServiceResult<Message> {
        Ok(self
            .ctx
            .message_repo()
            .find_by_id(message_id)
            .await?
            .ok_or(DomainError::MessageNotFound(message_id))?)
    }

    pub async fn bot(&self, bot_id: Snowflake) -> ServiceResult<Bot> {
        Ok(self
            .ctx
            .bot_repo()
            .find_by_id(bot_id)
            .await?
            .ok_or(DomainError::BotNotFound(bot_id))?)
    }

    // === Decisions ===

    /// Whether `user` owns or has a character in `channel`
    pub async fn is_member(&self, user: &User, channel: &Channel) -> ServiceResult<bool> {
        let repo = self.ctx.character_repo();
        let member = access::is_member(user, channel, |user_id, channel_id| {
            repo.exists_in_channel(user_id, channel_id)
        })
        .await?;
        debug!(user_id = %user.id, channel_id = %channel.id, member, "Membership checked");
        Ok(member)
    }

    pub async fn can_view_channel(&self, user: &User, channel: &Channel) -> ServiceResult<bool> {
        access::can_view_channel(user, channel, || self.is_member(user, channel)).await
    }

    pub async fn can_view_message(
        &self,
        user: &User,
        channel: &Channel,
        message: &Message,
    ) -> ServiceResult<bool> {
        access::can_view_message(user, channel, message, || self.is_member(user, channel)).await
    }

    /// Fail with `NotChannelMember` unless `user` belongs to `channel`
    pub async fn require_member(&self, user: &User, channel: &Channel) -> ServiceResult<()> {
        if self.is_member(user, channel).await? {
            Ok(())
        } else {
            Err(DomainError::NotChannelMember.into())
        }
    }

    /// Fail with `NotChannelOwner` unless `user` owns `channel`
    pub fn require_owner(&self, user: &User, channel: &Channel) -> ServiceResult<()> {
        if access::is_owner(user, channel) {
            Ok(())
        } else {
            Err(DomainError::NotChannelOwner.into())
        }
    }

    /// User owning the character that spoke `message`
    pub async fn message_author(&self, message: &Message) -> ServiceResult<Snowflake> {
        Ok(self.character(message.character_id).await?.user_id)
    }
}
