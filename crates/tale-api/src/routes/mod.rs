//! Route definitions
//!
//! All API routes organized by resource and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{admin, auth, bots, channels, characters, health, messages, public, users};
use crate::state::AppState;

/// API routes, without the health probes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (kept apart so they bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(channel_routes())
        .merge(message_routes())
        .merge(character_routes())
        .merge(bot_routes())
        .nest("/admin", admin_routes())
        .nest("/public", public_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/refresh", post(auth::refresh_token))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new().route(
        "/users/:user_id",
        get(users::get_user)
            .put(users::update_user)
            .delete(users::delete_user),
    )
}

/// Channel routes
fn channel_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/channels",
            get(channels::list_channels).post(channels::create_channel),
        )
        .route(
            "/channels/:channel_id",
            get(channels::get_channel)
                .put(channels::update_channel)
                .delete(channels::delete_channel),
        )
        .route(
            "/channels/:channel_id/users",
            get(channels::list_channel_users),
        )
}

/// Message routes
fn message_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/channels/:channel_id/messages",
            get(messages::list_messages).post(messages::create_message),
        )
        .route(
            "/messages/:message_id",
            get(messages::get_message)
                .put(messages::update_message)
                .delete(messages::delete_message),
        )
}

/// Character routes
fn character_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/channels/:channel_id/characters",
            get(characters::list_characters).post(characters::create_character),
        )
        .route(
            "/characters/:character_id",
            get(characters::get_character)
                .put(characters::update_character)
                .delete(characters::delete_character),
        )
}

/// Bot routes
fn bot_routes() -> Router<AppState> {
    Router::new()
        .route("/bots", get(bots::list_bots).post(bots::create_bot))
        .route(
            "/bots/:bot_id",
            get(bots::get_bot)
                .put(bots::update_bot)
                .delete(bots::delete_bot),
        )
        .route(
            "/bots/:bot_id/creds",
            get(bots::get_credentials).post(bots::rotate_credentials),
        )
}

/// Administrator routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(admin::list_users))
        .route(
            "/users/:user_id",
            get(admin::get_user)
                .put(admin::update_user)
                .delete(admin::delete_user),
        )
        .route("/channels", get(admin::list_channels))
        .route(
            "/channels/:channel_id",
            get(admin::get_channel)
                .put(admin::update_channel)
                .delete(admin::delete_channel),
        )
        .route("/channels/:channel_id/messages", get(admin::list_messages))
        .route(
            "/messages/:message_id",
            get(admin::get_message)
                .put(admin::update_message)
                .delete(admin::delete_message),
        )
        .route(
            "/channels/:channel_id/characters",
            get(admin::list_characters),
        )
        .route(
            "/characters/:character_id",
            get(admin::get_character)
                .put(admin::update_character)
                .delete(admin::delete_character),
        )
}

/// Anonymous read-only routes
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/channels", get(public::list_channels))
        .route("/channels/:channel_id", get(public::get_channel))
        .route("/channels/:channel_id/messages", get(public::list_messages))
}
