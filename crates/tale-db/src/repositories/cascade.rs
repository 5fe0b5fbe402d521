//! PostgreSQL implementation of CascadeRepository
//!
//! Every method runs inside a single transaction; an early return drops the
//! transaction, which rolls it back.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{info, instrument};

use tale_core::entities::{Bot, BotCredentials};
use tale_core::error::DomainError;
use tale_core::traits::{CascadeRepository, RepoResult};
use tale_core::value_objects::Snowflake;

use super::error::{ensure_affected, map_db_error, map_unique_violation};

/// PostgreSQL implementation of CascadeRepository
#[derive(Clone)]
pub struct PgCascadeRepository {
    pool: PgPool,
}

impl PgCascadeRepository {
    /// Create a new PgCascadeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn begin(&self) -> RepoResult<Transaction<'static, Postgres>> {
        self.pool.begin().await.map_err(map_db_error)
    }
}

/// Delete everything hanging off the given channels, then the channels
async fn purge_channels(tx: &mut Transaction<'_, Postgres>, channel_ids: &[i64]) -> RepoResult<u64> {
    sqlx::query("DELETE FROM messages WHERE channel_id = ANY($1)")
        .bind(channel_ids)
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;

    sqlx::query("DELETE FROM characters WHERE channel_id = ANY($1)")
        .bind(channel_ids)
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;

    let result = sqlx::query("DELETE FROM channels WHERE id = ANY($1)")
        .bind(channel_ids)
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;

    Ok(result.rows_affected())
}

/// Delete the credentials of the given bots, then the bots
async fn purge_bots(tx: &mut Transaction<'_, Postgres>, bot_ids: &[i64]) -> RepoResult<u64> {
    sqlx::query("DELETE FROM bot_credentials WHERE bot_id = ANY($1)")
        .bind(bot_ids)
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;

    let result = sqlx::query("DELETE FROM bots WHERE id = ANY($1)")
        .bind(bot_ids)
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;

    Ok(result.rows_affected())
}

#[async_trait]
impl CascadeRepository for PgCascadeRepository {
    #[instrument(skip(self))]
    async fn delete_channel_cascade(&self, channel_id: Snowflake) -> RepoResult<()> {
        let mut tx = self.begin().await?;

        if purge_channels(&mut tx, &[channel_id.into_inner()]).await? == 0 {
            return Err(DomainError::ChannelNotFound(channel_id));
        }

        tx.commit().await.map_err(map_db_error)?;
        info!(channel_id = %channel_id, "Channel and its contents deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_character_cascade(&self, character_id: Snowflake) -> RepoResult<()> {
        let mut tx = self.begin().await?;

        sqlx::query("DELETE FROM messages WHERE character_id = $1")
            .bind(character_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(character_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        ensure_affected(&result, || DomainError::CharacterNotFound(character_id))?;

        tx.commit().await.map_err(map_db_error)?;
        info!(character_id = %character_id, "Character and its messages deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_user_cascade(&self, user_id: Snowflake) -> RepoResult<()> {
        let mut tx = self.begin().await?;
        let id = user_id.into_inner();

        // Messages spoken through the user's characters in other people's channels
        sqlx::query(
            r"
            DELETE FROM messages
            WHERE character_id IN (SELECT id FROM characters WHERE user_id = $1)
            ",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query("DELETE FROM characters WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let owned_channels: Vec<i64> =
            sqlx::query_scalar("SELECT id FROM channels WHERE owner_id = $1")
                .bind(id)
                .fetch_all(&mut *tx)
                .await
                .map_err(map_db_error)?;
        purge_channels(&mut tx, &owned_channels).await?;

        let owned_bots: Vec<i64> = sqlx::query_scalar("SELECT id FROM bots WHERE owner_id = $1")
            .bind(id)
            .fetch_all(&mut *tx)
            .await
            .map_err(map_db_error)?;
        purge_bots(&mut tx, &owned_bots).await?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        ensure_affected(&result, || DomainError::UserNotFound(user_id))?;

        tx.commit().await.map_err(map_db_error)?;
        info!(
            user_id = %user_id,
            channels = owned_channels.len(),
            bots = owned_bots.len(),
            "User and owned content deleted"
        );
        Ok(())
    }

    #[instrument(skip(self, bot, credentials), fields(bot_id = %bot.id))]
    async fn create_bot_with_credentials(
        &self,
        bot: &Bot,
        credentials: &BotCredentials,
    ) -> RepoResult<()> {
        let mut tx = self.begin().await?;

        sqlx::query(
            r"
            INSERT INTO bots (id, owner_id, workspace, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(bot.id.into_inner())
        .bind(bot.owner_id.into_inner())
        .bind(&bot.workspace)
        .bind(bot.created_at)
        .bind(bot.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO bot_credentials (id, bot_id, client_id, client_secret, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(credentials.id.into_inner())
        .bind(credentials.bot_id.into_inner())
        .bind(&credentials.client_id)
        .bind(&credentials.client_secret)
        .bind(credentials.created_at)
        .bind(credentials.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ClientIdExists))?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_bot_cascade(&self, bot_id: Snowflake) -> RepoResult<()> {
        let mut tx = self.begin().await?;

        if purge_bots(&mut tx, &[bot_id.into_inner()]).await? == 0 {
            return Err(DomainError::BotNotFound(bot_id));
        }

        tx.commit().await.map_err(map_db_error)?;
        info!(bot_id = %bot_id, "Bot and credentials deleted");
        Ok(())
    }
}
