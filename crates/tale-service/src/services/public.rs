//! Public service
//!
//! Anonymous, read-only view of public channels and their story messages.
//! Private channels are reported as missing.

use tale_core::entities::{Channel, MessageKind, Privacy};
use tale_core::{DomainError, Snowflake};
use tracing::instrument;

use crate::dto::{ChannelResponse, MessageResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Public service
pub struct PublicService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PublicService<'a> {
    /// Create a new PublicService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn public_channel(&self, channel_id: Snowflake) -> ServiceResult<Channel> {
        match self.ctx.channel_repo().find_by_id(channel_id).await? {
            Some(channel) if channel.is_public() => Ok(channel),
            _ => Err(DomainError::ChannelNotFound(channel_id).into()),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_channels(&self) -> ServiceResult<Vec<ChannelResponse>> {
        let channels = self
            .ctx
            .channel_repo()
            .find_all(Some(Privacy::Public))
            .await?;
        Ok(channels.iter().map(ChannelResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_channel(&self, channel_id: Snowflake) -> ServiceResult<ChannelResponse> {
        let channel = self.public_channel(channel_id).await?;
        Ok(ChannelResponse::from(&channel))
    }

    /// Story messages of a public channel, oldest first
    #[instrument(skip(self))]
    pub async fn list_messages(&self, channel_id: Snowflake) -> ServiceResult<Vec<MessageResponse>> {
        let channel = self.public_channel(channel_id).await?;
        let messages = self
            .ctx
            .message_repo()
            .find_by_channel(channel.id, Some(MessageKind::Story))
            .await?;
        Ok(messages.iter().map(MessageResponse::from).collect())
    }
}
