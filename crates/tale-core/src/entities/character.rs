//! Character entity - a user's persona inside one channel
//!
//! Owning a character in a channel is what makes a user a member of it.

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    pub user_id: Snowflake,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Character {
    pub fn new(id: Snowflake, channel_id: Snowflake, user_id: Snowflake, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            channel_id,
            user_id,
            name,
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.user_id == user_id
    }

    #[inline]
    pub fn belongs_to(&self, channel_id: Snowflake) -> bool {
        self.channel_id == channel_id
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    pub fn set_description(&mut self, description: String) {
        self.description = description;
        self.updated_at = Utc::now();
    }
}
