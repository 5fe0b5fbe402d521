//! Message service
//!
//! Handles listing, reading, posting, editing and deleting messages. Story
//! messages of public channels are open to every signed-in user; everything
//! else needs channel membership.

use tale_core::entities::{Message, MessageKind};
use tale_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CreateMessageRequest, MessageResponse, UpdateMessageRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn permissions(&self) -> PermissionService<'a> {
        PermissionService::new(self.ctx)
    }

    /// List messages of a channel, oldest first, optionally of one kind
    #[instrument(skip(self))]
    pub async fn list_messages(
        &self,
        user_id: Snowflake,
        channel_id: Snowflake,
        kind: Option<MessageKind>,
    ) -> ServiceResult<Vec<MessageResponse>> {
        let perms = self.permissions();
        let user = perms.actor(user_id).await?;
        let channel = perms.channel(channel_id).await?;

        let open_to_all = kind == Some(MessageKind::Story) && channel.is_public();
        if !open_to_all {
            perms.require_member(&user, &channel).await?;
        }

        let messages = self
            .ctx
            .message_repo()
            .find_by_channel(channel_id, kind)
            .await?;
        Ok(messages.iter().map(MessageResponse::from).collect())
    }

    /// Get a single message
    #[instrument(skip(self))]
    pub async fn get_message(
        &self,
        user_id: Snowflake,
        message_id: Snowflake,
    ) -> ServiceResult<MessageResponse> {
        let perms = self.permissions();
        let user = perms.actor(user_id).await?;
        let message = perms.message(message_id).await?;
        let channel = perms.channel(message.channel_id).await?;

        if !perms.can_view_message(&user, &channel, &message).await? {
            return Err(DomainError::NotChannelMember.into());
        }
        Ok(MessageResponse::from(&message))
    }

    /// Post a message as one of the caller's characters in the channel
    #[instrument(skip(self, request))]
    pub async fn create_message(
        &self,
        user_id: Snowflake,
        channel_id: Snowflake,
        request: CreateMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        let perms = self.permissions();
        let user = perms.actor(user_id).await?;
        let channel = perms.channel(channel_id).await?;
        perms.require_member(&user, &channel).await?;

        if request.content.trim().is_empty() {
            return Err(DomainError::EmptyContent.into());
        }

        let character = perms.character(request.character_id).await?;
        if !character.is_owned_by(user.id) || !character.belongs_to(channel.id) {
            return Err(DomainError::CharacterChannelMismatch.into());
        }

        let message = Message::new(
            self.ctx.generate_id(),
            channel.id,
            character.id,
            request.content,
            MessageKind::from(request.is_story),
        );
        self.ctx.message_repo().create(&message).await?;

        info!(
            message_id = %message.id,
            channel_id = %channel_id,
            character_id = %character.id,
            "Message created"
        );

        Ok(MessageResponse::from(&message))
    }

    /// Edit a message (author only)
    #[instrument(skip(self, request))]
    pub async fn update_message(
        &self,
        user_id: Snowflake,
        message_id: Snowflake,
        request: UpdateMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        let perms = self.permissions();
        let user = perms.actor(user_id).await?;
        let mut message = perms.message(message_id).await?;

        if perms.message_author(&message).await? != user.id {
            return Err(DomainError::NotMessageAuthor.into());
        }
        if request.content.trim().is_empty() {
            return Err(DomainError::EmptyContent.into());
        }

        message.edit(request.content);
        self.ctx.message_repo().update(&message).await?;

        info!(message_id = %message_id, "Message updated");

        Ok(MessageResponse::from(&message))
    }

    /// Delete a message (author or channel owner)
    #[instrument(skip(self))]
    pub async fn delete_message(&self, user_id: Snowflake, message_id: Snowflake) -> ServiceResult<()> {
        let perms = self.permissions();
        let user = perms.actor(user_id).await?;
        let message = perms.message(message_id).await?;

        if perms.message_author(&message).await? != user.id {
            let channel = perms.channel(message.channel_id).await?;
            if perms.require_owner(&user, &channel).is_err() {
                return Err(DomainError::NotMessageAuthor.into());
            }
        }

        self.ctx.message_repo().delete(message_id).await?;

        info!(message_id = %message_id, "Message deleted");

        Ok(())
    }
}
