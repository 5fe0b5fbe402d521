//! Business logic services
//!
//! One service per resource. Every authenticated entry point takes the caller's
//! user id, resolves it through [`PermissionService::actor`] and applies the
//! resource's access policy before touching the store.

pub mod admin;
pub mod auth;
pub mod bot;
pub mod channel;
pub mod character;
pub mod context;
pub mod error;
pub mod message;
pub mod permission;
pub mod public;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use admin::AdminService;
pub use auth::AuthService;
pub use bot::BotService;
pub use channel::ChannelService;
pub use character::CharacterService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use message::MessageService;
pub use permission::PermissionService;
pub use public::PublicService;
pub use user::UserService;
