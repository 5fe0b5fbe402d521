//! Character database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for characters table
#[derive(Debug, Clone, FromRow)]
pub struct CharacterModel {
    pub id: i64,
    pub channel_id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
