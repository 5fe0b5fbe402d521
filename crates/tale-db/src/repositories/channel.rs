//! PostgreSQL implementation of ChannelRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tale_core::entities::{Channel, Privacy};
use tale_core::error::DomainError;
use tale_core::traits::{ChannelRepository, RepoResult};
use tale_core::value_objects::Snowflake;

use crate::models::ChannelModel;

use super::error::{ensure_affected, map_db_error};

/// PostgreSQL implementation of ChannelRepository
#[derive(Clone)]
pub struct PgChannelRepository {
    pool: PgPool,
}

impl PgChannelRepository {
    /// Create a new PgChannelRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Bind value for an optional privacy filter (`NULL` matches both)
fn privacy_filter(privacy: Option<Privacy>) -> Option<bool> {
    privacy.map(Privacy::is_private)
}

#[async_trait]
impl ChannelRepository for PgChannelRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Channel>> {
        let result = sqlx::query_as::<_, ChannelModel>(
            r"
            SELECT id, owner_id, name, description, topic, is_private, created_at, updated_at
            FROM channels
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Channel::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self, privacy: Option<Privacy>) -> RepoResult<Vec<Channel>> {
        let results = sqlx::query_as::<_, ChannelModel>(
            r"
            SELECT id, owner_id, name, description, topic, is_private, created_at, updated_at
            FROM channels
            WHERE $1::BOOLEAN IS NULL OR is_private = $1
            ORDER BY id
            ",
        )
        .bind(privacy_filter(privacy))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Channel::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_owned_by(&self, user_id: Snowflake) -> RepoResult<Vec<Channel>> {
        let results = sqlx::query_as::<_, ChannelModel>(
            r"
            SELECT id, owner_id, name, description, topic, is_private, created_at, updated_at
            FROM channels
            WHERE owner_id = $1
            ORDER BY id
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Channel::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_with_character_of(
        &self,
        user_id: Snowflake,
        privacy: Option<Privacy>,
    ) -> RepoResult<Vec<Channel>> {
        let results = sqlx::query_as::<_, ChannelModel>(
            r"
            SELECT c.id, c.owner_id, c.name, c.description, c.topic, c.is_private,
                   c.created_at, c.updated_at
            FROM channels c
            WHERE EXISTS (
                SELECT 1 FROM characters ch WHERE ch.channel_id = c.id AND ch.user_id = $1
            )
              AND ($2::BOOLEAN IS NULL OR c.is_private = $2)
            ORDER BY c.id
            ",
        )
        .bind(user_id.into_inner())
        .bind(privacy_filter(privacy))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Channel::from).collect())
    }

    #[instrument(skip(self, channel), fields(channel_id = %channel.id))]
    async fn create(&self, channel: &Channel) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO channels (id, owner_id, name, description, topic, is_private, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(channel.id.into_inner())
        .bind(channel.owner_id.into_inner())
        .bind(&channel.name)
        .bind(&channel.description)
        .bind(&channel.topic)
        .bind(channel.is_private)
        .bind(channel.created_at)
        .bind(channel.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, channel), fields(channel_id = %channel.id))]
    async fn update(&self, channel: &Channel) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE channels
            SET name = $2, description = $3, topic = $4, is_private = $5, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(channel.id.into_inner())
        .bind(&channel.name)
        .bind(&channel.description)
        .bind(&channel.topic)
        .bind(channel.is_private)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        ensure_affected(&result, || DomainError::ChannelNotFound(channel.id))?;

        Ok(())
    }
}
