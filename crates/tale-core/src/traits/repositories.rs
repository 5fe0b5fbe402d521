//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Finders return `Option`; updating or deleting
//! a missing row yields the entity's not-found error.

use async_trait::async_trait;

use crate::entities::{Bot, BotCredentials, Channel, Character, Message, MessageKind, Privacy, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// List every user, ordered by id
    async fn find_all(&self) -> RepoResult<Vec<User>>;

    /// Users with at least one character in the channel, plus its owner
    async fn find_by_channel(&self, channel_id: Snowflake) -> RepoResult<Vec<User>>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;

    /// Update an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Stamp `last_login` with the current time
    async fn update_last_login(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Channel Repository
// ============================================================================

#[async_trait]
pub trait ChannelRepository: Send + Sync {
    /// Find channel by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Channel>>;

    /// List channels, optionally restricted to one privacy setting
    async fn find_all(&self, privacy: Option<Privacy>) -> RepoResult<Vec<Channel>>;

    /// Channels owned by a user
    async fn find_owned_by(&self, user_id: Snowflake) -> RepoResult<Vec<Channel>>;

    /// Channels in which a user has at least one character
    async fn find_with_character_of(
        &self,
        user_id: Snowflake,
        privacy: Option<Privacy>,
    ) -> RepoResult<Vec<Channel>>;

    /// Create a new channel
    async fn create(&self, channel: &Channel) -> RepoResult<()>;

    /// Update an existing channel
    async fn update(&self, channel: &Channel) -> RepoResult<()>;
}

// ============================================================================
// Character Repository
// ============================================================================

#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Find character by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Character>>;

    /// List characters in a channel
    async fn find_by_channel(&self, channel_id: Snowflake) -> RepoResult<Vec<Character>>;

    /// Whether the user has at least one character in the channel
    async fn exists_in_channel(&self, user_id: Snowflake, channel_id: Snowflake)
        -> RepoResult<bool>;

    /// Create a new character
    async fn create(&self, character: &Character) -> RepoResult<()>;

    /// Update an existing character
    async fn update(&self, character: &Character) -> RepoResult<()>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find message by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Message>>;

    /// List messages in a channel oldest first, optionally of a single kind
    async fn find_by_channel(
        &self,
        channel_id: Snowflake,
        kind: Option<MessageKind>,
    ) -> RepoResult<Vec<Message>>;

    /// Create a new message
    async fn create(&self, message: &Message) -> RepoResult<()>;

    /// Update message content (edit)
    async fn update(&self, message: &Message) -> RepoResult<()>;

    /// Delete a single message
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Bot Repository
// ============================================================================

#[async_trait]
pub trait BotRepository: Send + Sync {
    /// Find bot by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Bot>>;

    /// List every bot, ordered by id
    async fn find_all(&self) -> RepoResult<Vec<Bot>>;

    /// Client credentials of a bot
    async fn find_credentials(&self, bot_id: Snowflake) -> RepoResult<Option<BotCredentials>>;

    /// Update an existing bot
    async fn update(&self, bot: &Bot) -> RepoResult<()>;

    /// Replace the client pair of a bot's credentials
    async fn update_credentials(&self, credentials: &BotCredentials) -> RepoResult<()>;
}

// ============================================================================
// Cascade Repository
// ============================================================================

/// Multi-entity mutations, each executed as one atomic unit
#[async_trait]
pub trait CascadeRepository: Send + Sync {
    /// Delete a channel's messages, then its characters, then the channel
    async fn delete_channel_cascade(&self, channel_id: Snowflake) -> RepoResult<()>;

    /// Delete a character's messages, then the character
    async fn delete_character_cascade(&self, character_id: Snowflake) -> RepoResult<()>;

    /// Delete messages of the user's characters, the characters, then the user
    async fn delete_user_cascade(&self, user_id: Snowflake) -> RepoResult<()>;

    /// Insert a bot together with its credentials
    async fn create_bot_with_credentials(
        &self,
        bot: &Bot,
        credentials: &BotCredentials,
    ) -> RepoResult<()>;

    /// Delete a bot's credentials, then the bot
    async fn delete_bot_cascade(&self, bot_id: Snowflake) -> RepoResult<()>;
}
