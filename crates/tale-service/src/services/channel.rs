//! Channel service
//!
//! Handles channel listing, creation, management, and member queries.

use tale_core::entities::{Channel, Privacy};
use tale_core::{merge_channel_listings, ChannelListLevel, DomainError, Snowflake};
use tracing::{debug, info, instrument};

use crate::dto::{ChannelResponse, CreateChannelRequest, PublicUserResponse, UpdateChannelRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Channel service
pub struct ChannelService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChannelService<'a> {
    /// Create a new ChannelService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn permissions(&self) -> PermissionService<'a> {
        PermissionService::new(self.ctx)
    }

    /// List the channels the caller can see at the requested level, ordered by id
    #[instrument(skip(self))]
    pub async fn list_channels(
        &self,
        user_id: Snowflake,
        level: ChannelListLevel,
    ) -> ServiceResult<Vec<ChannelResponse>> {
        let user = self.permissions().actor(user_id).await?;
        let repo = self.ctx.channel_repo();

        let mut channels = match level {
            ChannelListLevel::Owner => repo.find_owned_by(user.id).await?,
            ChannelListLevel::Member => {
                let (owned, joined) = futures::try_join!(
                    repo.find_owned_by(user.id),
                    repo.find_with_character_of(user.id, None),
                )?;
                merge_channel_listings([owned, joined])
            }
            ChannelListLevel::Visible => {
                let (public, joined_private, owned) = futures::try_join!(
                    repo.find_all(Some(Privacy::Public)),
                    repo.find_with_character_of(user.id, Some(Privacy::Private)),
                    repo.find_owned_by(user.id),
                )?;
                merge_channel_listings([public, joined_private, owned])
            }
        };
        channels.sort_by_key(|c| c.id);

        debug!(count = channels.len(), ?level, "Channels listed");
        Ok(channels.iter().map(ChannelResponse::from).collect())
    }

    /// Get a channel; private channels the caller cannot see do not exist for them
    #[instrument(skip(self))]
    pub async fn get_channel(
        &self,
        user_id: Snowflake,
        channel_id: Snowflake,
    ) -> ServiceResult<ChannelResponse> {
        let perms = self.permissions();
        let user = perms.actor(user_id).await?;
        let channel = perms.channel(channel_id).await?;

        if !perms.can_view_channel(&user, &channel).await? {
            return Err(DomainError::ChannelNotFound(channel_id).into());
        }
        Ok(ChannelResponse::from(&channel))
    }

    /// Create a channel owned by the caller
    #[instrument(skip(self, request))]
    pub async fn create_channel(
        &self,
        user_id: Snowflake,
        request: CreateChannelRequest,
    ) -> ServiceResult<ChannelResponse> {
        let user = self.permissions().actor(user_id).await?;

        let mut channel = Channel::new(
            self.ctx.generate_id(),
            user.id,
            request.name,
            request.is_private,
        );
        if let Some(description) = request.description {
            channel.description = description;
        }
        if let Some(topic) = request.topic {
            channel.topic = topic;
        }

        self.ctx.channel_repo().create(&channel).await?;

        info!(channel_id = %channel.id, owner_id = %user.id, "Channel created");

        Ok(ChannelResponse::from(&channel))
    }

    /// Update a channel (owner only)
    #[instrument(skip(self, request))]
    pub async fn update_channel(
        &self,
        user_id: Snowflake,
        channel_id: Snowflake,
        request: UpdateChannelRequest,
    ) -> ServiceResult<ChannelResponse> {
        let perms = self.permissions();
        let user = perms.actor(user_id).await?;
        let mut channel = perms.channel(channel_id).await?;
        perms.require_owner(&user, &channel)?;

        apply_channel_update(&mut channel, request);
        self.ctx.channel_repo().update(&channel).await?;

        info!(channel_id = %channel_id, "Channel updated");

        Ok(ChannelResponse::from(&channel))
    }

    /// Delete a channel with its characters and messages (owner only)
    #[instrument(skip(self))]
    pub async fn delete_channel(&self, user_id: Snowflake, channel_id: Snowflake) -> ServiceResult<()> {
        let perms = self.permissions();
        let user = perms.actor(user_id).await?;
        let channel = perms.channel(channel_id).await?;
        perms.require_owner(&user, &channel)?;

        self.ctx.cascade_repo().delete_channel_cascade(channel_id).await?;

        info!(channel_id = %channel_id, "Channel deleted");

        Ok(())
    }

    /// Members of a channel: its owner plus every user with a character in it
    #[instrument(skip(self))]
    pub async fn list_channel_users(
        &self,
        user_id: Snowflake,
        channel_id: Snowflake,
    ) -> ServiceResult<Vec<PublicUserResponse>> {
        let perms = self.permissions();
        let user = perms.actor(user_id).await?;
        let channel = perms.channel(channel_id).await?;

        if channel.is_private {
            perms.require_member(&user, &channel).await?;
        }

        let users = self.ctx.user_repo().find_by_channel(channel_id).await?;
        Ok(users.iter().map(PublicUserResponse::from).collect())
    }
}

/// Apply the present fields of an update request to a channel
pub(crate) fn apply_channel_update(channel: &mut Channel, request: UpdateChannelRequest) {
    if let Some(name) = request.name {
        channel.set_name(name);
    }
    if let Some(description) = request.description {
        channel.set_description(description);
    }
    if let Some(topic) = request.topic {
        channel.set_topic(topic);
    }
    if let Some(is_private) = request.is_private {
        channel.set_private(is_private);
    }
}
