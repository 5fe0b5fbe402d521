//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Query DTOs for listing filters
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    AdminUpdateUserRequest, ChannelListQuery, CreateBotRequest, CreateChannelRequest,
    CreateCharacterRequest, CreateMessageRequest, ExternalProfile, MessageListQuery,
    RefreshTokenRequest, UpdateBotRequest, UpdateChannelRequest, UpdateCharacterRequest,
    UpdateMessageRequest, UpdateUserRequest,
};

// Re-export commonly used response types
pub use responses::{
    AuthResponse, BotCreatedResponse, BotCredentialsResponse, BotResponse,
    ChannelResponse, CharacterResponse, HealthChecks, HealthResponse, MessageResponse,
    PublicUserResponse, ReadinessResponse, UserResponse,
};
