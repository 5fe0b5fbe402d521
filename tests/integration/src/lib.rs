//! Integration test utilities for the tale API
//!
//! Spawns the full HTTP application over the in-memory store and talks to
//! it with a real client.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
