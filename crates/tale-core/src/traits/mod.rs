//! Repository traits (ports)

mod repositories;

pub use repositories::{
    BotRepository, CascadeRepository, ChannelRepository, CharacterRepository, MessageRepository,
    RepoResult, UserRepository,
};
