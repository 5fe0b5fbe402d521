//! Domain entities - core business objects

mod bot;
mod channel;
mod character;
mod message;
mod user;

pub use bot::{Bot, BotCredentials};
pub use channel::{Channel, Privacy};
pub use character::Character;
pub use message::{Message, MessageKind};
pub use user::User;
