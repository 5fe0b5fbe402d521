//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Coarse error category every layer maps onto a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    Forbidden,
    Validation,
    Conflict,
    /// A collaborator (store, clock, token service) failed
    Dependency,
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Channel not found: {0}")]
    ChannelNotFound(Snowflake),

    #[error("Character not found: {0}")]
    CharacterNotFound(Snowflake),

    #[error("Message not found: {0}")]
    MessageNotFound(Snowflake),

    #[error("Bot not found: {0}")]
    BotNotFound(Snowflake),

    #[error("Credentials not found for bot: {0}")]
    BotCredentialsNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Character name must not be empty")]
    EmptyCharacterName,

    #[error("Message content must not be empty")]
    EmptyContent,

    #[error("Unknown listing level: {0}")]
    UnknownListLevel(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not channel owner")]
    NotChannelOwner,

    #[error("Not a member of this channel")]
    NotChannelMember,

    #[error("Not message author")]
    NotMessageAuthor,

    #[error("Not character owner")]
    NotCharacterOwner,

    #[error("Not bot owner")]
    NotBotOwner,

    #[error("Character does not belong to caller in this channel")]
    CharacterChannelMismatch,

    #[error("Cannot moderate an administrator")]
    CannotModerateAdmin,

    #[error("User is banned")]
    UserBanned,

    #[error("Can only access own user record")]
    NotSelf,

    #[error("Administrator privileges required")]
    AdminRequired,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Bot client id already in use")]
    ClientIdExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UserNotFound(_)
            | Self::ChannelNotFound(_)
            | Self::CharacterNotFound(_)
            | Self::MessageNotFound(_)
            | Self::BotNotFound(_)
            | Self::BotCredentialsNotFound(_) => ErrorKind::NotFound,

            Self::ValidationError(_)
            | Self::EmptyCharacterName
            | Self::EmptyContent
            | Self::UnknownListLevel(_) => ErrorKind::Validation,

            Self::NotChannelOwner
            | Self::NotChannelMember
            | Self::NotMessageAuthor
            | Self::NotCharacterOwner
            | Self::NotBotOwner
            | Self::CharacterChannelMismatch
            | Self::CannotModerateAdmin
            | Self::UserBanned
            | Self::NotSelf
            | Self::AdminRequired => ErrorKind::Forbidden,

            Self::EmailAlreadyExists | Self::ClientIdExists => ErrorKind::Conflict,

            Self::DatabaseError(_) | Self::InternalError(_) => ErrorKind::Dependency,
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ChannelNotFound(_) => "UNKNOWN_CHANNEL",
            Self::CharacterNotFound(_) => "UNKNOWN_CHARACTER",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::BotNotFound(_) => "UNKNOWN_BOT",
            Self::BotCredentialsNotFound(_) => "UNKNOWN_BOT_CREDENTIALS",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::EmptyCharacterName => "EMPTY_CHARACTER_NAME",
            Self::EmptyContent => "EMPTY_CONTENT",
            Self::UnknownListLevel(_) => "UNKNOWN_LIST_LEVEL",

            // Authorization
            Self::NotChannelOwner => "NOT_CHANNEL_OWNER",
            Self::NotChannelMember => "NOT_CHANNEL_MEMBER",
            Self::NotMessageAuthor => "NOT_MESSAGE_AUTHOR",
            Self::NotCharacterOwner => "NOT_CHARACTER_OWNER",
            Self::NotBotOwner => "NOT_BOT_OWNER",
            Self::CharacterChannelMismatch => "CHARACTER_CHANNEL_MISMATCH",
            Self::CannotModerateAdmin => "CANNOT_MODERATE_ADMIN",
            Self::UserBanned => "USER_BANNED",
            Self::NotSelf => "NOT_SELF",
            Self::AdminRequired => "ADMIN_REQUIRED",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::ClientIdExists => "CLIENT_ID_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        self.kind() == ErrorKind::Forbidden
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        self.kind() == ErrorKind::Conflict
    }

    /// Check if a collaborator failed
    pub fn is_dependency(&self) -> bool {
        self.kind() == ErrorKind::Dependency
    }
}
