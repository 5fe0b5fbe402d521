//! Service context - dependency container for services
//!
//! Holds the repositories, the token service and the id generator needed by
//! services. Nothing in here is global; the API layer builds one context from
//! `AppConfig` and hands out references to it.

use std::sync::Arc;

use tale_common::auth::JwtService;
use tale_core::traits::{
    BotRepository, CascadeRepository, ChannelRepository, CharacterRepository, MessageRepository,
    UserRepository,
};
use tale_core::{Snowflake, SnowflakeGenerator};
use tale_db::{
    InMemoryStore, PgBotRepository, PgCascadeRepository, PgChannelRepository,
    PgCharacterRepository, PgMessageRepository, PgPool, PgUserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    channel_repo: Arc<dyn ChannelRepository>,
    character_repo: Arc<dyn CharacterRepository>,
    message_repo: Arc<dyn MessageRepository>,
    bot_repo: Arc<dyn BotRepository>,
    cascade_repo: Arc<dyn CascadeRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        channel_repo: Arc<dyn ChannelRepository>,
        character_repo: Arc<dyn CharacterRepository>,
        message_repo: Arc<dyn MessageRepository>,
        bot_repo: Arc<dyn BotRepository>,
        cascade_repo: Arc<dyn CascadeRepository>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            user_repo,
            channel_repo,
            character_repo,
            message_repo,
            bot_repo,
            cascade_repo,
            jwt_service,
            snowflake_generator,
        }
    }

    /// Context backed by PostgreSQL repositories sharing one pool
    pub fn postgres(
        pool: PgPool,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self::new(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgChannelRepository::new(pool.clone())),
            Arc::new(PgCharacterRepository::new(pool.clone())),
            Arc::new(PgMessageRepository::new(pool.clone())),
            Arc::new(PgBotRepository::new(pool.clone())),
            Arc::new(PgCascadeRepository::new(pool)),
            jwt_service,
            snowflake_generator,
        )
    }

    /// Context backed by a shared in-memory store
    pub fn in_memory(
        store: InMemoryStore,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store),
            jwt_service,
            snowflake_generator,
        )
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the channel repository
    pub fn channel_repo(&self) -> &dyn ChannelRepository {
        self.channel_repo.as_ref()
    }

    /// Get the character repository
    pub fn character_repo(&self) -> &dyn CharacterRepository {
        self.character_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the bot repository
    pub fn bot_repo(&self) -> &dyn BotRepository {
        self.bot_repo.as_ref()
    }

    /// Get the repository running multi-entity mutations
    pub fn cascade_repo(&self) -> &dyn CascadeRepository {
        self.cascade_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("issuer", &self.jwt_service.issuer())
            .field("worker_id", &self.snowflake_generator.worker_id())
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    channel_repo: Option<Arc<dyn ChannelRepository>>,
    character_repo: Option<Arc<dyn CharacterRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    bot_repo: Option<Arc<dyn BotRepository>>,
    cascade_repo: Option<Arc<dyn CascadeRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn channel_repo(mut self, repo: Arc<dyn ChannelRepository>) -> Self {
        self.channel_repo = Some(repo);
        self
    }

    pub fn character_repo(mut self, repo: Arc<dyn CharacterRepository>) -> Self {
        self.character_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn bot_repo(mut self, repo: Arc<dyn BotRepository>) -> Self {
        self.bot_repo = Some(repo);
        self
    }

    pub fn cascade_repo(mut self, repo: Arc<dyn CascadeRepository>) -> Self {
        self.cascade_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.channel_repo
                .ok_or_else(|| ServiceError::validation("channel_repo is required"))?,
            self.character_repo
                .ok_or_else(|| ServiceError::validation("character_repo is required"))?,
            self.message_repo
                .ok_or_else(|| ServiceError::validation("message_repo is required"))?,
            self.bot_repo
                .ok_or_else(|| ServiceError::validation("bot_repo is required"))?,
            self.cascade_repo
                .ok_or_else(|| ServiceError::validation("cascade_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}
