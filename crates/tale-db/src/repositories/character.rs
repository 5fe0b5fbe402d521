//! PostgreSQL implementation of CharacterRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tale_core::entities::Character;
use tale_core::error::DomainError;
use tale_core::traits::{CharacterRepository, RepoResult};
use tale_core::value_objects::Snowflake;

use crate::models::CharacterModel;

use super::error::{ensure_affected, map_db_error};

/// PostgreSQL implementation of CharacterRepository
#[derive(Clone)]
pub struct PgCharacterRepository {
    pool: PgPool,
}

impl PgCharacterRepository {
    /// Create a new PgCharacterRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CharacterRepository for PgCharacterRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Character>> {
        let result = sqlx::query_as::<_, CharacterModel>(
            r"
            SELECT id, channel_id, user_id, name, description, created_at, updated_at
            FROM characters
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Character::from))
    }

    #[instrument(skip(self))]
    async fn find_by_channel(&self, channel_id: Snowflake) -> RepoResult<Vec<Character>> {
        let results = sqlx::query_as::<_, CharacterModel>(
            r"
            SELECT id, channel_id, user_id, name, description, created_at, updated_at
            FROM characters
            WHERE channel_id = $1
            ORDER BY id
            ",
        )
        .bind(channel_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Character::from).collect())
    }

    #[instrument(skip(self))]
    async fn exists_in_channel(
        &self,
        user_id: Snowflake,
        channel_id: Snowflake,
    ) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM characters WHERE user_id = $1 AND channel_id = $2)
            ",
        )
        .bind(user_id.into_inner())
        .bind(channel_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, character), fields(character_id = %character.id))]
    async fn create(&self, character: &Character) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO characters (id, channel_id, user_id, name, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(character.id.into_inner())
        .bind(character.channel_id.into_inner())
        .bind(character.user_id.into_inner())
        .bind(&character.name)
        .bind(&character.description)
        .bind(character.created_at)
        .bind(character.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, character), fields(character_id = %character.id))]
    async fn update(&self, character: &Character) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE characters
            SET name = $2, description = $3, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(character.id.into_inner())
        .bind(&character.name)
        .bind(&character.description)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        ensure_affected(&result, || DomainError::CharacterNotFound(character.id))?;

        Ok(())
    }
}
