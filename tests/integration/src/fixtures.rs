//! Test fixtures and data generators
//!
//! Wire shapes of the requests and responses exercised by the tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

/// Full user record
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub bio: String,
    pub is_admin: bool,
    pub is_banned: bool,
}

/// User as listed in a channel
#[derive(Debug, Deserialize)]
pub struct PublicUserResponse {
    pub id: String,
    pub username: String,
}

/// Create channel request
#[derive(Debug, Serialize)]
pub struct CreateChannelRequest {
    pub name: String,
    pub topic: Option<String>,
    pub is_private: bool,
}

impl CreateChannelRequest {
    pub fn public() -> Self {
        Self::named(false)
    }

    pub fn private() -> Self {
        Self::named(true)
    }

    fn named(is_private: bool) -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("tale-{suffix}"),
            topic: Some("A test story".to_string()),
            is_private,
        }
    }
}

/// Channel response
#[derive(Debug, Deserialize)]
pub struct ChannelResponse {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub topic: String,
    pub is_private: bool,
}

/// Create character request
#[derive(Debug, Serialize)]
pub struct CreateCharacterRequest {
    pub user_id: String,
    pub name: String,
}

impl CreateCharacterRequest {
    pub fn for_user(user_id: impl ToString, name: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            name: name.to_string(),
        }
    }
}

/// Character response
#[derive(Debug, Deserialize)]
pub struct CharacterResponse {
    pub id: String,
    pub channel_id: String,
    pub user_id: String,
    pub name: String,
}

/// Create message request
#[derive(Debug, Serialize)]
pub struct CreateMessageRequest {
    pub character_id: String,
    pub content: String,
    pub is_story: bool,
}

impl CreateMessageRequest {
    pub fn story(character_id: &str, content: &str) -> Self {
        Self {
            character_id: character_id.to_string(),
            content: content.to_string(),
            is_story: true,
        }
    }

    pub fn meta(character_id: &str, content: &str) -> Self {
        Self {
            is_story: false,
            ..Self::story(character_id, content)
        }
    }
}

/// Message response
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub id: String,
    pub channel_id: String,
    pub character_id: String,
    pub content: String,
    pub is_story: bool,
    pub msg_type: String,
}

/// Bot response
#[derive(Debug, Deserialize)]
pub struct BotResponse {
    pub id: String,
    pub owner_id: String,
    pub workspace: String,
}

/// Bot client credentials
#[derive(Debug, Deserialize)]
pub struct BotCredentialsResponse {
    pub bot_id: String,
    pub client_id: String,
    pub client_secret: String,
}

/// Bot creation response
#[derive(Debug, Deserialize)]
pub struct BotCreatedResponse {
    #[serde(flatten)]
    pub bot: BotResponse,
    pub credentials: BotCredentialsResponse,
}
