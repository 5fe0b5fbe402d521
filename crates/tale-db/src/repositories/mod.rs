//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in tale-core.
//! Each repository handles database operations for a specific domain entity.

mod bot;
mod cascade;
mod channel;
mod character;
mod error;
mod message;
mod user;

pub use bot::PgBotRepository;
pub use cascade::PgCascadeRepository;
pub use channel::PgChannelRepository;
pub use character::PgCharacterRepository;
pub use message::PgMessageRepository;
pub use user::PgUserRepository;
