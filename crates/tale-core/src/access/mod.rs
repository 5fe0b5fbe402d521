//! Membership and visibility rules
//!
//! Pure decision functions over already-loaded entities. Anything that needs
//! the store is passed in as an async closure so callers decide how lookups
//! happen and store failures propagate unchanged.

mod listing;
mod visibility;

pub use listing::{merge_channel_listings, ChannelListLevel};
pub use visibility::{can_moderate_user, can_view_channel, can_view_message, is_member, is_owner};
