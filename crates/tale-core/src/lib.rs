//! # tale-core
//!
//! Domain layer containing entities, value objects, access rules, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod access;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use access::{
    can_moderate_user, can_view_channel, can_view_message, is_member, is_owner,
    merge_channel_listings, ChannelListLevel,
};
pub use entities::{Bot, BotCredentials, Channel, Character, Message, MessageKind, Privacy, User};
pub use error::{DomainError, ErrorKind};
pub use traits::{
    BotRepository, CascadeRepository, ChannelRepository, CharacterRepository, MessageRepository,
    RepoResult, UserRepository,
};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
