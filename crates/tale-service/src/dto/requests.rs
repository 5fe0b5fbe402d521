//! Request DTOs for API endpoints
//!
//! Body DTOs implement `Deserialize` and `Validate` for input validation.
//! Query DTOs parse their raw strings into domain filters.

use serde::Deserialize;
use tale_core::{ChannelListLevel, DomainError, MessageKind, Snowflake};
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Identity asserted by an external sign-in provider
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExternalProfile {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Self-service profile update
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: Option<String>,

    #[validate(length(max = 1000, message = "Bio must be at most 1000 characters"))]
    pub bio: Option<String>,
}

/// Admin update of another user, including ban state
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AdminUpdateUserRequest {
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: Option<String>,

    #[validate(length(max = 1000, message = "Bio must be at most 1000 characters"))]
    pub bio: Option<String>,

    pub is_banned: Option<bool>,
}

// ============================================================================
// Channel Requests
// ============================================================================

/// Create channel request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateChannelRequest {
    #[validate(length(min = 1, max = 100, message = "Channel name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 1024, message = "Topic must be at most 1024 characters"))]
    pub topic: Option<String>,

    #[serde(default)]
    pub is_private: bool,
}

/// Update channel request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateChannelRequest {
    #[validate(length(min = 1, max = 100, message = "Channel name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 1024, message = "Topic must be at most 1024 characters"))]
    pub topic: Option<String>,

    pub is_private: Option<bool>,
}

/// `?level=` filter for channel listings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelListQuery {
    pub level: Option<String>,
}

impl ChannelListQuery {
    /// Parse the listing level; absent or empty means the default listing
    pub fn level(&self) -> Result<ChannelListLevel, DomainError> {
        self.level.as_deref().unwrap_or_default().parse()
    }
}

// ============================================================================
// Message Requests
// ============================================================================

/// Create message request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMessageRequest {
    /// Character speaking the message
    pub character_id: Snowflake,

    #[validate(length(max = 4000, message = "Message content must be at most 4000 characters"))]
    pub content: String,

    #[serde(default)]
    pub is_story: bool,
}

/// Edit message request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMessageRequest {
    #[validate(length(max = 4000, message = "Message content must be at most 4000 characters"))]
    pub content: String,
}

/// `?msg_type=` filter for message listings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageListQuery {
    #[serde(alias = "msgType")]
    pub msg_type: Option<String>,
}

impl MessageListQuery {
    /// Parse the message kind filter; absent or empty means every kind
    pub fn kind(&self) -> Result<Option<MessageKind>, DomainError> {
        match self.msg_type.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some),
        }
    }
}

// ============================================================================
// Character Requests
// ============================================================================

/// Create character request; assigning one to another user invites them
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCharacterRequest {
    /// User who will own and play the character
    pub user_id: Snowflake,

    #[validate(length(max = 64, message = "Character name must be at most 64 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
}

/// Update character request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCharacterRequest {
    #[validate(length(max = 64, message = "Character name must be at most 64 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
}

// ============================================================================
// Bot Requests
// ============================================================================

/// Create bot request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBotRequest {
    #[validate(length(min = 1, max = 100, message = "Workspace must be 1-100 characters"))]
    pub workspace: String,
}

/// Update bot request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateBotRequest {
    #[validate(length(min = 1, max = 100, message = "Workspace must be 1-100 characters"))]
    pub workspace: String,
}
