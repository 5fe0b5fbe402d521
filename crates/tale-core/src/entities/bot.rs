//! Bot entity and its client credentials

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bot {
    pub id: Snowflake,
    pub owner_id: Snowflake,
    pub workspace: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bot {
    pub fn new(id: Snowflake, owner_id: Snowflake, workspace: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            owner_id,
            workspace,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.owner_id == user_id
    }

    pub fn set_workspace(&mut self, workspace: String) {
        self.workspace = workspace;
        self.updated_at = Utc::now();
    }
}

/// Client credentials, exactly one set per bot
#[derive(Clone, PartialEq, Eq)]
pub struct BotCredentials {
    pub id: Snowflake,
    pub bot_id: Snowflake,
    pub client_id: String,
    pub client_secret: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BotCredentials {
    pub fn new(id: Snowflake, bot_id: Snowflake, client_id: String, client_secret: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            bot_id,
            client_id,
            client_secret,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the client pair, keeping the row identity
    pub fn rotate(&mut self, client_id: String, client_secret: String) {
        self.client_id = client_id;
        self.client_secret = client_secret;
        self.updated_at = Utc::now();
    }
}

impl std::fmt::Debug for BotCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotCredentials")
            .field("id", &self.id)
            .field("bot_id", &self.bot_id)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}
