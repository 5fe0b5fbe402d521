//! Message entity - something a character said in a channel

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// In-character story text or out-of-character meta chatter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Story,
    Meta,
}

impl MessageKind {
    #[inline]
    #[must_use]
    pub fn is_story(self) -> bool {
        matches!(self, Self::Story)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Story => "story",
            Self::Meta => "meta",
        }
    }
}

impl From<bool> for MessageKind {
    fn from(is_story: bool) -> Self {
        if is_story {
            Self::Story
        } else {
            Self::Meta
        }
    }
}

impl std::str::FromStr for MessageKind {
    type Err = crate::error::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "story" => Ok(Self::Story),
            "meta" => Ok(Self::Meta),
            other => Err(crate::error::DomainError::ValidationError(format!(
                "unknown message type '{other}', expected 'story' or 'meta'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    pub character_id: Snowflake,
    pub content: String,
    pub is_story: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Message {
    pub fn new(
        id: Snowflake,
        channel_id: Snowflake,
        character_id: Snowflake,
        content: String,
        kind: MessageKind,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            channel_id,
            character_id,
            content,
            is_story: kind.is_story(),
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn kind(&self) -> MessageKind {
        MessageKind::from(self.is_story)
    }

    pub fn edit(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }
}
