//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions from database rows to domain objects.
//! Writes bind entity fields directly, so no insert structs are needed.

mod bot;
mod channel;
mod character;
mod message;
mod user;
