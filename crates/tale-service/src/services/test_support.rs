//! Fixtures shared by the service unit tests

use std::sync::Arc;

use tale_common::auth::JwtService;
use tale_core::entities::{Channel, Character, Message, MessageKind, User};
use tale_core::traits::{
    ChannelRepository, CharacterRepository, MessageRepository, UserRepository,
};
use tale_core::{Snowflake, SnowflakeGenerator};
use tale_db::InMemoryStore;

use super::context::ServiceContext;

/// A service context over a fresh in-memory store
pub struct TestWorld {
    pub store: InMemoryStore,
    pub ctx: ServiceContext,
}

impl TestWorld {
    pub fn new() -> Self {
        let store = InMemoryStore::new();
        let ctx = ServiceContext::in_memory(
            store.clone(),
            Arc::new(JwtService::new("test-secret", "tale-test", 900, 3600)),
            Arc::new(SnowflakeGenerator::new(1)),
        );
        Self { store, ctx }
    }

    pub async fn user(&self, name: &str) -> User {
        let user = User::new(
            self.ctx.generate_id(),
            name.to_string(),
            format!("{name}@example.com"),
        );
        UserRepository::create(&self.store, &user).await.unwrap();
        user
    }

    pub async fn admin(&self, name: &str) -> User {
        let mut user = self.user(name).await;
        user.is_admin = true;
        UserRepository::update(&self.store, &user).await.unwrap();
        user
    }

    pub async fn ban(&self, user_id: Snowflake) {
        let mut user = self.fetch_user(user_id).await.unwrap();
        user.set_banned(true);
        UserRepository::update(&self.store, &user).await.unwrap();
    }

    pub async fn fetch_user(&self, user_id: Snowflake) -> Option<User> {
        UserRepository::find_by_id(&self.store, user_id).await.unwrap()
    }

    pub async fn channel(&self, owner: &User, is_private: bool) -> Channel {
        let channel = Channel::new(
            self.ctx.generate_id(),
            owner.id,
            format!("{}'s table", owner.username),
            is_private,
        );
        ChannelRepository::create(&self.store, &channel).await.unwrap();
        channel
    }

    pub async fn character(&self, channel: &Channel, user: &User, name: &str) -> Character {
        let character = Character::new(self.ctx.generate_id(), channel.id, user.id, name.to_string());
        CharacterRepository::create(&self.store, &character)
            .await
            .unwrap();
        character
    }

    pub async fn message(&self, character: &Character, content: &str, kind: MessageKind) -> Message {
        let message = Message::new(
            self.ctx.generate_id(),
            character.channel_id,
            character.id,
            content.to_string(),
            kind,
        );
        MessageRepository::create(&self.store, &message).await.unwrap();
        message
    }
}
