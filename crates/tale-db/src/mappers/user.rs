//! User model -> entity mapper

use tale_core::entities::User;
use tale_core::value_objects::Snowflake;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            email: model.email,
            bio: model.bio,
            is_admin: model.is_admin,
            is_banned: model.is_banned,
            last_login: model.last_login,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
