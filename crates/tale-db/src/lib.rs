//! # tale-db
//!
//! Storage layer implementing the tale-core repository traits.
//!
//! - [`repositories`]: PostgreSQL via SQLx, one repository per entity plus
//!   transactional cascades
//! - [`memory`]: an in-process store with the same semantics
//! - [`pool`]: connection pool and schema migrations
//!
//! ```rust,ignore
//! use tale_db::pool::{create_pool, run_migrations, PoolOptions};
//! use tale_db::PgUserRepository;
//!
//! let pool = create_pool(&PoolOptions::new(&config.database)).await?;
//! run_migrations(&pool).await?;
//! let users = PgUserRepository::new(pool);
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::InMemoryStore;
pub use pool::{create_pool, run_migrations, PgPool, PoolOptions};
pub use repositories::{
    PgBotRepository, PgCascadeRepository, PgChannelRepository, PgCharacterRepository,
    PgMessageRepository, PgUserRepository,
};
