//! Message database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for messages table
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: i64,
    pub channel_id: i64,
    pub character_id: i64,
    pub content: String,
    pub is_story: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
