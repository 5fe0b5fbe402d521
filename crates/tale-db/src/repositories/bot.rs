//! PostgreSQL implementation of BotRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tale_core::entities::{Bot, BotCredentials};
use tale_core::error::DomainError;
use tale_core::traits::{BotRepository, RepoResult};
use tale_core::value_objects::Snowflake;

use crate::models::{BotCredentialsModel, BotModel};

use super::error::{ensure_affected, map_db_error, map_unique_violation};

/// PostgreSQL implementation of BotRepository
#[derive(Clone)]
pub struct PgBotRepository {
    pool: PgPool,
}

impl PgBotRepository {
    /// Create a new PgBotRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BotRepository for PgBotRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Bot>> {
        let result = sqlx::query_as::<_, BotModel>(
            r"
            SELECT id, owner_id, workspace, created_at, updated_at
            FROM bots
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Bot::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Bot>> {
        let results = sqlx::query_as::<_, BotModel>(
            r"
            SELECT id, owner_id, workspace, created_at, updated_at
            FROM bots
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Bot::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_credentials(&self, bot_id: Snowflake) -> RepoResult<Option<BotCredentials>> {
        let result = sqlx::query_as::<_, BotCredentialsModel>(
            r"
            SELECT id, bot_id, client_id, client_secret, created_at, updated_at
            FROM bot_credentials
            WHERE bot_id = $1
            ",
        )
        .bind(bot_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(BotCredentials::from))
    }

    #[instrument(skip(self, bot), fields(bot_id = %bot.id))]
    async fn update(&self, bot: &Bot) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE bots
            SET workspace = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(bot.id.into_inner())
        .bind(&bot.workspace)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        ensure_affected(&result, || DomainError::BotNotFound(bot.id))?;

        Ok(())
    }

    #[instrument(skip(self, credentials), fields(bot_id = %credentials.bot_id))]
    async fn update_credentials(&self, credentials: &BotCredentials) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE bot_credentials
            SET client_id = $2, client_secret = $3, updated_at = NOW()
            WHERE bot_id = $1
            ",
        )
        .bind(credentials.bot_id.into_inner())
        .bind(&credentials.client_id)
        .bind(&credentials.client_secret)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ClientIdExists))?;

        ensure_affected(&result, || {
            DomainError::BotCredentialsNotFound(credentials.bot_id)
        })?;

        Ok(())
    }
}
