//! # tale-service
//!
//! Application layer: per-resource access policies, DTOs, and the service
//! context that wires repositories and token issuing together.

pub mod dto;
pub mod services;

pub use services::{
    AdminService, AuthService, BotService, ChannelService, CharacterService, MessageService,
    PermissionService, PublicService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, UserService,
};
