//! User entity - an account created on first external sign-in

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub bio: String,
    pub is_admin: bool,
    pub is_banned: bool,
    pub last_login: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a regular (non-admin, non-banned) user
    pub fn new(id: Snowflake, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            bio: String::new(),
            is_admin: false,
            is_banned: false,
            last_login: now,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the account may act at all
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.is_banned
    }

    pub fn set_username(&mut self, username: String) {
        self.username = username;
        self.updated_at = Utc::now();
    }

    pub fn set_bio(&mut self, bio: String) {
        self.bio = bio;
        self.updated_at = Utc::now();
    }

    pub fn set_banned(&mut self, banned: bool) {
        self.is_banned = banned;
        self.updated_at = Utc::now();
    }

    /// Record a successful sign-in
    pub fn touch_login(&mut self) {
        self.last_login = Utc::now();
    }
}
