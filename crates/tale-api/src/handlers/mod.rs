//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod admin;
pub mod auth;
pub mod bots;
pub mod channels;
pub mod characters;
pub mod health;
pub mod messages;
pub mod public;
pub mod users;
