//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use tale_core::entities::{Bot, BotCredentials, Channel, Character, Message, User};

use super::responses::{
    BotCredentialsResponse, BotResponse, ChannelResponse, CharacterResponse, MessageResponse,
    PublicUserResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            bio: user.bio.clone(),
            is_admin: user.is_admin,
            is_banned: user.is_banned,
            last_login: user.last_login,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for PublicUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            bio: user.bio.clone(),
        }
    }
}

impl From<User> for PublicUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Channel Mappers
// ============================================================================

impl From<&Channel> for ChannelResponse {
    fn from(channel: &Channel) -> Self {
        Self {
            id: channel.id.to_string(),
            owner_id: channel.owner_id.to_string(),
            name: channel.name.clone(),
            description: channel.description.clone(),
            topic: channel.topic.clone(),
            is_private: channel.is_private,
            created_at: channel.created_at,
            updated_at: channel.updated_at,
        }
    }
}

impl From<Channel> for ChannelResponse {
    fn from(channel: Channel) -> Self {
        Self::from(&channel)
    }
}

// ============================================================================
// Character Mappers
// ============================================================================

impl From<&Character> for CharacterResponse {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id.to_string(),
            channel_id: character.channel_id.to_string(),
            user_id: character.user_id.to_string(),
            name: character.name.clone(),
            description: character.description.clone(),
            created_at: character.created_at,
            updated_at: character.updated_at,
        }
    }
}

impl From<Character> for CharacterResponse {
    fn from(character: Character) -> Self {
        Self::from(&character)
    }
}

// ============================================================================
// Message Mappers
// ============================================================================

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id.to_string(),
            channel_id: message.channel_id.to_string(),
            character_id: message.character_id.to_string(),
            content: message.content.clone(),
            is_story: message.is_story,
            msg_type: message.kind().as_str(),
            created_at: message.created_at,
            updated_at: message.updated_at,
        }
    }
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self::from(&message)
    }
}

// ============================================================================
// Bot Mappers
// ============================================================================

impl From<&Bot> for BotResponse {
    fn from(bot: &Bot) -> Self {
        Self {
            id: bot.id.to_string(),
            owner_id: bot.owner_id.to_string(),
            workspace: bot.workspace.clone(),
            created_at: bot.created_at,
            updated_at: bot.updated_at,
        }
    }
}

impl From<Bot> for BotResponse {
    fn from(bot: Bot) -> Self {
        Self::from(&bot)
    }
}

impl From<&BotCredentials> for BotCredentialsResponse {
    fn from(creds: &BotCredentials) -> Self {
        Self {
            bot_id: creds.bot_id.to_string(),
            client_id: creds.client_id.clone(),
            client_secret: creds.client_secret.clone(),
            updated_at: creds.updated_at,
        }
    }
}

impl From<BotCredentials> for BotCredentialsResponse {
    fn from(creds: BotCredentials) -> Self {
        Self::from(&creds)
    }
}
