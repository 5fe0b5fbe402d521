//! Database models - SQLx-compatible structs for PostgreSQL tables

mod bot;
mod channel;
mod character;
mod message;
mod user;

pub use bot::{BotCredentialsModel, BotModel};
pub use channel::ChannelModel;
pub use character::CharacterModel;
pub use message::MessageModel;
pub use user::UserModel;
