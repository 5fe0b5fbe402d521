//! In-memory entity store
//!
//! Implements every repository trait over ordered maps behind one
//! `parking_lot::RwLock`, so each cascade is a single write-locked critical
//! section. Used by the service tests, the HTTP integration tests and the
//! `memory` store backend.

mod state;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::{debug, instrument};

use tale_core::entities::{
    Bot, BotCredentials, Channel, Character, Message, MessageKind, Privacy, User,
};
use tale_core::error::DomainError;
use tale_core::traits::{
    BotRepository, CascadeRepository, ChannelRepository, CharacterRepository, MessageRepository,
    RepoResult, UserRepository,
};
use tale_core::value_objects::Snowflake;

use state::State;

/// Shared in-memory store; clones see the same data
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<State>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with a database error (or recover)
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check(&self) -> RepoResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("store unavailable".to_string()));
        }
        Ok(())
    }

    /// Run `f` under the read lock
    fn read<T>(&self, f: impl FnOnce(&State) -> T) -> RepoResult<T> {
        self.check()?;
        Ok(f(&self.state.read()))
    }

    /// Run `f` under the write lock
    fn write<T>(&self, f: impl FnOnce(&mut State) -> RepoResult<T>) -> RepoResult<T> {
        self.check()?;
        f(&mut self.state.write())
    }
}

impl std::fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("InMemoryStore")
            .field("users", &state.users.len())
            .field("channels", &state.channels.len())
            .field("characters", &state.characters.len())
            .field("messages", &state.messages.len())
            .field("bots", &state.bots.len())
            .finish()
    }
}

fn matches_privacy(channel: &Channel, privacy: Option<Privacy>) -> bool {
    privacy.map_or(true, |p| channel.privacy() == p)
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        self.read(|s| s.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        self.read(|s| s.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<User>> {
        self.read(|s| s.users.values().cloned().collect())
    }

    async fn find_by_channel(&self, channel_id: Snowflake) -> RepoResult<Vec<User>> {
        self.read(|s| {
            let ids = s.member_ids(channel_id);
            ids.iter().filter_map(|id| s.users.get(id).cloned()).collect()
        })
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn create(&self, user: &User) -> RepoResult<()> {
        self.write(|s| {
            if s.users.values().any(|u| u.email == user.email) {
                return Err(DomainError::EmailAlreadyExists);
            }
            s.users.insert(user.id, user.clone());
            Ok(())
        })
    }

    async fn update(&self, user: &User) -> RepoResult<()> {
        self.write(|s| {
            let stored = s
                .users
                .get_mut(&user.id)
                .ok_or(DomainError::UserNotFound(user.id))?;
            stored.username.clone_from(&user.username);
            stored.bio.clone_from(&user.bio);
            stored.is_admin = user.is_admin;
            stored.is_banned = user.is_banned;
            stored.updated_at = Utc::now();
            Ok(())
        })
    }

    async fn update_last_login(&self, id: Snowflake) -> RepoResult<()> {
        self.write(|s| {
            let stored = s.users.get_mut(&id).ok_or(DomainError::UserNotFound(id))?;
            stored.last_login = Utc::now();
            Ok(())
        })
    }
}

#[async_trait]
impl ChannelRepository for InMemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Channel>> {
        self.read(|s| s.channels.get(&id).cloned())
    }

    async fn find_all(&self, privacy: Option<Privacy>) -> RepoResult<Vec<Channel>> {
        self.read(|s| {
            s.channels
                .values()
                .filter(|c| matches_privacy(c, privacy))
                .cloned()
                .collect()
        })
    }

    async fn find_owned_by(&self, user_id: Snowflake) -> RepoResult<Vec<Channel>> {
        self.read(|s| {
            s.channels
                .values()
                .filter(|c| c.owner_id == user_id)
                .cloned()
                .collect()
        })
    }

    async fn find_with_character_of(
        &self,
        user_id: Snowflake,
        privacy: Option<Privacy>,
    ) -> RepoResult<Vec<Channel>> {
        self.read(|s| {
            s.channels
                .values()
                .filter(|c| matches_privacy(c, privacy) && s.has_character(user_id, c.id))
                .cloned()
                .collect()
        })
    }

    async fn create(&self, channel: &Channel) -> RepoResult<()> {
        self.write(|s| {
            s.channels.insert(channel.id, channel.clone());
            Ok(())
        })
    }

    async fn update(&self, channel: &Channel) -> RepoResult<()> {
        self.write(|s| {
            let stored = s
                .channels
                .get_mut(&channel.id)
                .ok_or(DomainError::ChannelNotFound(channel.id))?;
            stored.name.clone_from(&channel.name);
            stored.description.clone_from(&channel.description);
            stored.topic.clone_from(&channel.topic);
            stored.is_private = channel.is_private;
            stored.updated_at = Utc::now();
            Ok(())
        })
    }
}

#[async_trait]
impl CharacterRepository for InMemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Character>> {
        self.read(|s| s.characters.get(&id).cloned())
    }

    async fn find_by_channel(&self, channel_id: Snowflake) -> RepoResult<Vec<Character>> {
        self.read(|s| {
            s.characters
                .values()
                .filter(|c| c.channel_id == channel_id)
                .cloned()
                .collect()
        })
    }

    async fn exists_in_channel(
        &self,
        user_id: Snowflake,
        channel_id: Snowflake,
    ) -> RepoResult<bool> {
        self.read(|s| s.has_character(user_id, channel_id))
    }

    async fn create(&self, character: &Character) -> RepoResult<()> {
        self.write(|s| {
            if !s.channels.contains_key(&character.channel_id) {
                return Err(DomainError::ChannelNotFound(character.channel_id));
            }
            if !s.users.contains_key(&character.user_id) {
                return Err(DomainError::UserNotFound(character.user_id));
            }
            s.characters.insert(character.id, character.clone());
            Ok(())
        })
    }

    async fn update(&self, character: &Character) -> RepoResult<()> {
        self.write(|s| {
            let stored = s
                .characters
                .get_mut(&character.id)
                .ok_or(DomainError::CharacterNotFound(character.id))?;
            stored.name.clone_from(&character.name);
            stored.description.clone_from(&character.description);
            stored.updated_at = Utc::now();
            Ok(())
        })
    }
}

#[async_trait]
impl MessageRepository for InMemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Message>> {
        self.read(|s| s.messages.get(&id).cloned())
    }

    async fn find_by_channel(
        &self,
        channel_id: Snowflake,
        kind: Option<MessageKind>,
    ) -> RepoResult<Vec<Message>> {
        self.read(|s| {
            s.messages
                .values()
                .filter(|m| m.channel_id == channel_id)
                .filter(|m| kind.map_or(true, |k| m.kind() == k))
                .cloned()
                .collect()
        })
    }

    async fn create(&self, message: &Message) -> RepoResult<()> {
        self.write(|s| {
            if !s.channels.contains_key(&message.channel_id) {
                return Err(DomainError::ChannelNotFound(message.channel_id));
            }
            if !s.characters.contains_key(&message.character_id) {
                return Err(DomainError::CharacterNotFound(message.character_id));
            }
            s.messages.insert(message.id, message.clone());
            Ok(())
        })
    }

    async fn update(&self, message: &Message) -> RepoResult<()> {
        self.write(|s| {
            let stored = s
                .messages
                .get_mut(&message.id)
                .ok_or(DomainError::MessageNotFound(message.id))?;
            stored.content.clone_from(&message.content);
            stored.is_story = message.is_story;
            stored.updated_at = Utc::now();
            Ok(())
        })
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        self.write(|s| {
            s.messages
                .remove(&id)
                .map(|_| ())
                .ok_or(DomainError::MessageNotFound(id))
        })
    }
}

#[async_trait]
impl BotRepository for InMemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Bot>> {
        self.read(|s| s.bots.get(&id).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<Bot>> {
        self.read(|s| s.bots.values().cloned().collect())
    }

    async fn find_credentials(&self, bot_id: Snowflake) -> RepoResult<Option<BotCredentials>> {
        self.read(|s| s.credentials.get(&bot_id).cloned())
    }

    async fn update(&self, bot: &Bot) -> RepoResult<()> {
        self.write(|s| {
            let stored = s
                .bots
                .get_mut(&bot.id)
                .ok_or(DomainError::BotNotFound(bot.id))?;
            stored.workspace.clone_from(&bot.workspace);
            stored.updated_at = Utc::now();
            Ok(())
        })
    }

    async fn update_credentials(&self, credentials: &BotCredentials) -> RepoResult<()> {
        self.write(|s| {
            if s.client_id_taken(&credentials.client_id, Some(credentials.bot_id)) {
                return Err(DomainError::ClientIdExists);
            }
            let stored = s
                .credentials
                .get_mut(&credentials.bot_id)
                .ok_or(DomainError::BotCredentialsNotFound(credentials.bot_id))?;
            stored.client_id.clone_from(&credentials.client_id);
            stored.client_secret.clone_from(&credentials.client_secret);
            stored.updated_at = Utc::now();
            Ok(())
        })
    }
}

#[async_trait]
impl CascadeRepository for InMemoryStore {
    #[instrument(skip(self))]
    async fn delete_channel_cascade(&self, channel_id: Snowflake) -> RepoResult<()> {
        self.write(|s| {
            if !s.channels.contains_key(&channel_id) {
                return Err(DomainError::ChannelNotFound(channel_id));
            }
            s.purge_channel(channel_id);
            Ok(())
        })?;
        debug!(channel_id = %channel_id, "Channel purged");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_character_cascade(&self, character_id: Snowflake) -> RepoResult<()> {
        self.write(|s| {
            if s.characters.remove(&character_id).is_none() {
                return Err(DomainError::CharacterNotFound(character_id));
            }
            s.messages.retain(|_, m| m.character_id != character_id);
            Ok(())
        })
    }

    #[instrument(skip(self))]
    async fn delete_user_cascade(&self, user_id: Snowflake) -> RepoResult<()> {
        self.write(|s| {
            if !s.users.contains_key(&user_id) {
                return Err(DomainError::UserNotFound(user_id));
            }

            let characters: Vec<Snowflake> = s
                .characters
                .values()
                .filter(|c| c.user_id == user_id)
                .map(|c| c.id)
                .collect();
            s.messages.retain(|_, m| !characters.contains(&m.character_id));
            s.characters.retain(|_, c| c.user_id != user_id);

            let owned: Vec<Snowflake> = s
                .channels
                .values()
                .filter(|c| c.owner_id == user_id)
                .map(|c| c.id)
                .collect();
            for channel_id in owned {
                s.purge_channel(channel_id);
            }

            let bots: Vec<Snowflake> = s
                .bots
                .values()
                .filter(|b| b.owner_id == user_id)
                .map(|b| b.id)
                .collect();
            for bot_id in bots {
                s.credentials.remove(&bot_id);
                s.bots.remove(&bot_id);
            }

            s.users.remove(&user_id);
            Ok(())
        })
    }

    #[instrument(skip(self, bot, credentials), fields(bot_id = %bot.id))]
    async fn create_bot_with_credentials(
        &self,
        bot: &Bot,
        credentials: &BotCredentials,
    ) -> RepoResult<()> {
        self.write(|s| {
            if s.client_id_taken(&credentials.client_id, None) {
                return Err(DomainError::ClientIdExists);
            }
            s.bots.insert(bot.id, bot.clone());
            s.credentials.insert(bot.id, credentials.clone());
            Ok(())
        })
    }

    #[instrument(skip(self))]
    async fn delete_bot_cascade(&self, bot_id: Snowflake) -> RepoResult<()> {
        self.write(|s| {
            if !s.bots.contains_key(&bot_id) {
                return Err(DomainError::BotNotFound(bot_id));
            }
            s.credentials.remove(&bot_id);
            s.bots.remove(&bot_id);
            Ok(())
        })
    }
}
