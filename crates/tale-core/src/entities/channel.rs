//! Channel entity - a role-play room owned by exactly one user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Channel visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    #[default]
    Public,
    Private,
}

impl Privacy {
    #[inline]
    #[must_use]
    pub fn is_private(self) -> bool {
        matches!(self, Self::Private)
    }
}

impl From<bool> for Privacy {
    fn from(is_private: bool) -> Self {
        if is_private {
            Self::Private
        } else {
            Self::Public
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: Snowflake,
    pub owner_id: Snowflake,
    pub name: String,
    pub description: String,
    pub topic: String,
    pub is_private: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Channel {
    #[must_use]
    pub fn new(id: Snowflake, owner_id: Snowflake, name: String, is_private: bool) -> Self {
        let now = Utc::now();
        Self {
            id,
            owner_id,
            name,
            description: String::new(),
            topic: String::new(),
            is_private,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    #[must_use]
    pub fn privacy(&self) -> Privacy {
        Privacy::from(self.is_private)
    }

    #[inline]
    #[must_use]
    pub fn is_public(&self) -> bool {
        !self.is_private
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    pub fn set_description(&mut self, description: String) {
        self.description = description;
        self.updated_at = Utc::now();
    }

    pub fn set_topic(&mut self, topic: String) {
        self.topic = topic;
        self.updated_at = Utc::now();
    }

    /// Flip visibility; only affects requests made afterwards
    pub fn set_private(&mut self, is_private: bool) {
        self.is_private = is_private;
        self.updated_at = Utc::now();
    }
}
