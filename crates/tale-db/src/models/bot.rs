//! Bot and bot credential database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for bots table
#[derive(Debug, Clone, FromRow)]
pub struct BotModel {
    pub id: i64,
    pub owner_id: i64,
    pub workspace: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for bot_credentials table
#[derive(Clone, FromRow)]
pub struct BotCredentialsModel {
    pub id: i64,
    pub bot_id: i64,
    pub client_id: String,
    pub client_secret: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
