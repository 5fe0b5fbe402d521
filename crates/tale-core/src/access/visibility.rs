//! Ownership, membership and visibility decisions

use std::future::Future;

use crate::entities::{Channel, Message, User};
use crate::value_objects::Snowflake;

/// Whether `user` owns `channel`
#[inline]
pub fn is_owner(user: &User, channel: &Channel) -> bool {
    user.id == channel.owner_id
}

/// Whether `user` is a member of `channel`.
///
/// Owners are always members and never trigger the lookup. Everyone else is a
/// member iff `has_character(user_id, channel_id)` says so.
pub async fn is_member<F, Fut, E>(
    user: &User,
    channel: &Channel,
    has_character: F,
) -> Result<bool, E>
where
    F: FnOnce(Snowflake, Snowflake) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    if is_owner(user, channel) {
        return Ok(true);
    }
    has_character(user.id, channel.id).await
}

/// Whether `user` may see `channel` at all
pub async fn can_view_channel<F, Fut, E>(
    user: &User,
    channel: &Channel,
    is_member_fn: F,
) -> Result<bool, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    if user.is_banned {
        return Ok(false);
    }
    if channel.is_public() || is_owner(user, channel) {
        return Ok(true);
    }
    is_member_fn().await
}

/// Whether `user` may see `message`, which lives in `channel`.
///
/// Story messages in public channels are open to everyone; meta messages and
/// anything in a private channel require membership.
pub async fn can_view_message<F, Fut, E>(
    user: &User,
    channel: &Channel,
    message: &Message,
    is_member_fn: F,
) -> Result<bool, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    if user.is_banned {
        return Ok(false);
    }
    if message.is_story && channel.is_public() {
        return Ok(true);
    }
    is_member_fn().await
}

/// Whether `acting` may update, ban or delete `target`.
///
/// Admins can never moderate other admins, themselves included.
#[inline]
pub fn can_moderate_user(acting: &User, target: &User) -> bool {
    acting.is_admin && !acting.is_banned && !target.is_admin
}
