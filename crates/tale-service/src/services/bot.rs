//! Bot service
//!
//! Any signed-in user can browse bots and register one; only the owner can
//! change it or see its client credentials.

use tale_common::auth::generate_client_credentials;
use tale_core::entities::{Bot, BotCredentials, User};
use tale_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    BotCreatedResponse, BotCredentialsResponse, BotResponse, CreateBotRequest, UpdateBotRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Bot service
pub struct BotService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BotService<'a> {
    /// Create a new BotService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve the caller and a bot they must own
    async fn owned_bot(&self, user_id: Snowflake, bot_id: Snowflake) -> ServiceResult<(User, Bot)> {
        let perms = PermissionService::new(self.ctx);
        let user = perms.actor(user_id).await?;
        let bot = perms.bot(bot_id).await?;
        if !bot.is_owned_by(user.id) {
            return Err(DomainError::NotBotOwner.into());
        }
        Ok((user, bot))
    }

    #[instrument(skip(self))]
    pub async fn list_bots(&self, user_id: Snowflake) -> ServiceResult<Vec<BotResponse>> {
        PermissionService::new(self.ctx).actor(user_id).await?;
        let bots = self.ctx.bot_repo().find_all().await?;
        Ok(bots.iter().map(BotResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_bot(&self, user_id: Snowflake, bot_id: Snowflake) -> ServiceResult<BotResponse> {
        let perms = PermissionService::new(self.ctx);
        perms.actor(user_id).await?;
        Ok(BotResponse::from(&perms.bot(bot_id).await?))
    }

    /// Register a bot owned by the caller, generating its credentials
    #[instrument(skip(self, request))]
    pub async fn create_bot(
        &self,
        user_id: Snowflake,
        request: CreateBotRequest,
    ) -> ServiceResult<BotCreatedResponse> {
        let user = PermissionService::new(self.ctx).actor(user_id).await?;

        let bot = Bot::new(self.ctx.generate_id(), user.id, request.workspace);
        let generated = generate_client_credentials();
        let credentials = BotCredentials::new(
            self.ctx.generate_id(),
            bot.id,
            generated.client_id,
            generated.client_secret,
        );
        self.ctx
            .cascade_repo()
            .create_bot_with_credentials(&bot, &credentials)
            .await?;

        info!(bot_id = %bot.id, owner_id = %user.id, "Bot created");

        Ok(BotCreatedResponse {
            bot: BotResponse::from(&bot),
            credentials: BotCredentialsResponse::from(&credentials),
        })
    }

    #[instrument(skip(self, request))]
    pub async fn update_bot(
        &self,
        user_id: Snowflake,
        bot_id: Snowflake,
        request: UpdateBotRequest,
    ) -> ServiceResult<BotResponse> {
        let (_, mut bot) = self.owned_bot(user_id, bot_id).await?;

        bot.set_workspace(request.workspace);
        self.ctx.bot_repo().update(&bot).await?;

        info!(bot_id = %bot_id, "Bot updated");

        Ok(BotResponse::from(&bot))
    }

    /// Delete a bot and its credentials
    #[instrument(skip(self))]
    pub async fn delete_bot(&self, user_id: Snowflake, bot_id: Snowflake) -> ServiceResult<()> {
        self.owned_bot(user_id, bot_id).await?;
        self.ctx.cascade_repo().delete_bot_cascade(bot_id).await?;

        info!(bot_id = %bot_id, "Bot deleted");

        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_credentials(
        &self,
        user_id: Snowflake,
        bot_id: Snowflake,
    ) -> ServiceResult<BotCredentialsResponse> {
        self.owned_bot(user_id, bot_id).await?;
        let credentials = self.load_credentials(bot_id).await?;
        Ok(BotCredentialsResponse::from(&credentials))
    }

    /// Replace the bot's client id and secret
    #[instrument(skip(self))]
    pub async fn rotate_credentials(
        &self,
        user_id: Snowflake,
        bot_id: Snowflake,
    ) -> ServiceResult<BotCredentialsResponse> {
        self.owned_bot(user_id, bot_id).await?;
        let mut credentials = self.load_credentials(bot_id).await?;

        let generated = generate_client_credentials();
        credentials.rotate(generated.client_id, generated.client_secret);
        self.ctx.bot_repo().update_credentials(&credentials).await?;

        info!(bot_id = %bot_id, "Bot credentials rotated");

        Ok(BotCredentialsResponse::from(&credentials))
    }

    async fn load_credentials(&self, bot_id: Snowflake) -> ServiceResult<BotCredentials> {
        Ok(self
            .ctx
            .bot_repo()
            .find_credentials(bot_id)
            .await?
            .ok_or(DomainError::BotCredentialsNotFound(bot_id))?)
    }
}
