//! API Integration Tests
//!
//! Each test spawns the full application over a fresh in-memory store, so
//! no external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, Session, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

async fn server() -> TestServer {
    TestServer::start().await.expect("Failed to start server")
}

/// Owner creates a channel and gives `player` a character in it
async fn seeded_channel(
    server: &TestServer,
    owner: &Session,
    player: &Session,
    request: &CreateChannelRequest,
) -> (ChannelResponse, CharacterResponse) {
    let response = server.post_as(owner, "/api/v1/channels", request).await.unwrap();
    let channel: ChannelResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_as(
            owner,
            &format!("/api/v1/channels/{}/characters", channel.id),
            &CreateCharacterRequest::for_user(player.user_id, "Wren"),
        )
        .await
        .unwrap();
    let character: CharacterResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    (channel, character)
}

async fn post_message(
    server: &TestServer,
    session: &Session,
    channel: &ChannelResponse,
    request: &CreateMessageRequest,
) -> MessageResponse {
    let response = server
        .post_as(
            session,
            &format!("/api/v1/channels/{}/messages", channel.id),
            request,
        )
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = server().await;
    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = server().await;
    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["store"], "healthy");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = server().await;
    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_missing_and_bad_tokens() {
    let server = server().await;

    let response = server.get("/api/v1/channels").await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "MISSING_AUTH");

    let response = server
        .get_with_token("/api/v1/channels", "not-a-jwt")
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_TOKEN");
}

#[tokio::test]
async fn test_refresh_token() {
    let server = server().await;
    let session = server.sign_in("mira").await.unwrap();

    let response = server
        .post(
            "/api/v1/auth/refresh",
            &json!({ "refresh_token": session.refresh_token }),
        )
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(auth.user.id, session.user_id.to_string());
    assert_eq!(auth.token_type, "Bearer");
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());

    // Access tokens cannot be used to refresh
    let response = server
        .post(
            "/api/v1/auth/refresh",
            &json!({ "refresh_token": session.access_token }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_users_manage_only_themselves() {
    let server = server().await;
    let mira = server.sign_in("mira").await.unwrap();
    let theo = server.sign_in("theo").await.unwrap();

    let response = server
        .get_as(&mira, &format!("/api/v1/users/{}", mira.user_id))
        .await
        .unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!me.is_admin);
    assert!(me.email.contains("@example.com"));

    let response = server
        .put_as(
            &mira,
            &format!("/api/v1/users/{}", mira.user_id),
            &json!({ "bio": "Keeper of lore" }),
        )
        .await
        .unwrap();
    let updated: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.bio, "Keeper of lore");
    assert_eq!(updated.username, me.username);

    let response = server
        .get_as(&mira, &format!("/api/v1/users/{}", theo.user_id))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "NOT_SELF");

    let response = server
        .delete_as(&mira, &format!("/api/v1/users/{}", theo.user_id))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_deleted_user_token_is_rejected() {
    let server = server().await;
    let mira = server.sign_in("mira").await.unwrap();

    let response = server
        .delete_as(&mira, &format!("/api/v1/users/{}", mira.user_id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_as(&mira, "/api/v1/channels").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_invalid_path_id() {
    let server = server().await;
    let mira = server.sign_in("mira").await.unwrap();

    let response = server.get_as(&mira, "/api/v1/users/not-a-number").await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_PATH_PARAMETER");
}

// ============================================================================
// Channel Tests
// ============================================================================

#[tokio::test]
async fn test_private_channel_visibility() {
    let server = server().await;
    let owner = server.sign_in("owner").await.unwrap();
    let player = server.sign_in("player").await.unwrap();
    let stranger = server.sign_in("stranger").await.unwrap();

    let (channel, _) =
        seeded_channel(&server, &owner, &player, &CreateChannelRequest::private()).await;
    let path = format!("/api/v1/channels/{}", channel.id);

    for session in [&owner, &player] {
        let response = server.get_as(session, &path).await.unwrap();
        let seen: ChannelResponse = assert_json(response, StatusCode::OK).await.unwrap();
        assert!(seen.is_private);
    }

    // Hidden, not merely forbidden
    let response = server.get_as(&stranger, &path).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_CHANNEL");

    let response = server.get_as(&stranger, "/api/v1/channels").await.unwrap();
    let visible: Vec<ChannelResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(visible.iter().all(|c| c.id != channel.id));

    let response = server.get_as(&player, "/api/v1/channels").await.unwrap();
    let visible: Vec<ChannelResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(visible.iter().any(|c| c.id == channel.id));
}

#[tokio::test]
async fn test_channel_list_levels() {
    let server = server().await;
    let owner = server.sign_in("owner").await.unwrap();
    let player = server.sign_in("player").await.unwrap();

    let (joined, _) =
        seeded_channel(&server, &owner, &player, &CreateChannelRequest::public()).await;
    let response = server
        .post_as(&player, "/api/v1/channels", &CreateChannelRequest::private())
        .await
        .unwrap();
    let own: ChannelResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(own.owner_id, player.user_id.to_string());

    let response = server
        .get_as(&player, "/api/v1/channels?level=owner")
        .await
        .unwrap();
    let owned: Vec<ChannelResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].id, own.id);

    let response = server
        .get_as(&player, "/api/v1/channels?level=member")
        .await
        .unwrap();
    let member: Vec<ChannelResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let ids: Vec<&str> = member.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&joined.id.as_str()));
    assert!(ids.contains(&own.id.as_str()));

    let response = server
        .get_as(&player, "/api/v1/channels?level=everything")
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "UNKNOWN_LIST_LEVEL");
}

#[tokio::test]
async fn test_only_owner_changes_channel() {
    let server = server().await;
    let owner = server.sign_in("owner").await.unwrap();
    let player = server.sign_in("player").await.unwrap();
    let (channel, _) =
        seeded_channel(&server, &owner, &player, &CreateChannelRequest::public()).await;
    let path = format!("/api/v1/channels/{}", channel.id);

    let response = server
        .put_as(&player, &path, &json!({ "topic": "Hijacked" }))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "NOT_CHANNEL_OWNER");

    let response = server
        .put_as(&owner, &path, &json!({ "topic": "Act two" }))
        .await
        .unwrap();
    let updated: ChannelResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.topic, "Act two");
    assert_eq!(updated.name, channel.name);

    let response = server.delete_as(&player, &path).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_channel_delete_cascades() {
    let server = server().await;
    let owner = server.sign_in("owner").await.unwrap();
    let player = server.sign_in("player").await.unwrap();
    let (channel, character) =
        seeded_channel(&server, &owner, &player, &CreateChannelRequest::public()).await;
    let message = post_message(
        &server,
        &player,
        &channel,
        &CreateMessageRequest::story(&character.id, "Once upon a time"),
    )
    .await;

    let response = server
        .delete_as(&owner, &format!("/api/v1/channels/{}", channel.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_as(&player, &format!("/api/v1/messages/{}", message.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .get_as(&player, &format!("/api/v1/characters/{}", character.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_channel_users() {
    let server = server().await;
    let owner = server.sign_in("owner").await.unwrap();
    let player = server.sign_in("player").await.unwrap();
    let stranger = server.sign_in("stranger").await.unwrap();
    let (channel, _) =
        seeded_channel(&server, &owner, &player, &CreateChannelRequest::private()).await;
    let path = format!("/api/v1/channels/{}/users", channel.id);

    let response = server.get_as(&owner, &path).await.unwrap();
    let users: Vec<PublicUserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(users.iter().any(|u| u.id == player.user_id.to_string()));

    let response = server.get_as(&stranger, &path).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Character Tests
// ============================================================================

#[tokio::test]
async fn test_character_rules() {
    let server = server().await;
    let owner = server.sign_in("owner").await.unwrap();
    let player = server.sign_in("player").await.unwrap();
    let (channel, character) =
        seeded_channel(&server, &owner, &player, &CreateChannelRequest::public()).await;
    assert_eq!(character.user_id, player.user_id.to_string());
    assert_eq!(character.channel_id, channel.id);

    // Players cannot hand out characters
    let response = server
        .post_as(
            &player,
            &format!("/api/v1/channels/{}/characters", channel.id),
            &CreateCharacterRequest::for_user(player.user_id, "Second"),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "NOT_CHANNEL_OWNER");

    let response = server
        .post_as(
            &owner,
            &format!("/api/v1/channels/{}/characters", channel.id),
            &CreateCharacterRequest::for_user(player.user_id, ""),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "EMPTY_CHARACTER_NAME");

    // Only the player renames their character
    let path = format!("/api/v1/characters/{}", character.id);
    let response = server
        .put_as(&owner, &path, &json!({ "name": "Renamed" }))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "NOT_CHARACTER_OWNER");

    let response = server
        .put_as(&player, &path, &json!({ "name": "Wren the Bold" }))
        .await
        .unwrap();
    let renamed: CharacterResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(renamed.name, "Wren the Bold");

    // The channel owner may remove it
    let response = server.delete_as(&owner, &path).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Message Tests
// ============================================================================

#[tokio::test]
async fn test_message_visibility_on_public_channel() {
    let server = server().await;
    let owner = server.sign_in("owner").await.unwrap();
    let player = server.sign_in("player").await.unwrap();
    let stranger = server.sign_in("stranger").await.unwrap();
    let (channel, character) =
        seeded_channel(&server, &owner, &player, &CreateChannelRequest::public()).await;

    let story = post_message(
        &server,
        &player,
        &channel,
        &CreateMessageRequest::story(&character.id, "The gates creak open."),
    )
    .await;
    let meta = post_message(
        &server,
        &player,
        &channel,
        &CreateMessageRequest::meta(&character.id, "brb"),
    )
    .await;
    assert_eq!(story.msg_type, "story");
    assert_eq!(meta.msg_type, "meta");

    let messages_path = format!("/api/v1/channels/{}/messages", channel.id);

    let response = server
        .get_as(&stranger, &format!("{messages_path}?msg_type=story"))
        .await
        .unwrap();
    let stories: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stories.len(), 1);
    assert_eq!(stories[0].id, story.id);

    let response = server
        .get_as(&stranger, &format!("{messages_path}?msg_type=meta"))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "NOT_CHANNEL_MEMBER");

    let response = server
        .get_as(&stranger, &format!("/api/v1/messages/{}", story.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_as(&stranger, &format!("/api/v1/messages/{}", meta.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.get_as(&player, &messages_path).await.unwrap();
    let all: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_posting_requires_own_character_in_channel() {
    let server = server().await;
    let owner = server.sign_in("owner").await.unwrap();
    let player = server.sign_in("player").await.unwrap();
    let other = server.sign_in("other").await.unwrap();
    let (channel, character) =
        seeded_channel(&server, &owner, &player, &CreateChannelRequest::public()).await;
    let (elsewhere, foreign) =
        seeded_channel(&server, &owner, &other, &CreateChannelRequest::public()).await;
    let messages_path = format!("/api/v1/channels/{}/messages", channel.id);

    // Not a member
    let response = server
        .post_as(
            &other,
            &messages_path,
            &CreateMessageRequest::story(&foreign.id, "Let me in"),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "NOT_CHANNEL_MEMBER");

    // The owner is a member but does not own the player's character
    let response = server
        .post_as(
            &owner,
            &messages_path,
            &CreateMessageRequest::story(&character.id, "Puppeteering"),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "CHARACTER_CHANNEL_MISMATCH");

    // A character from another channel
    let response = server
        .post_as(
            &other,
            &format!("/api/v1/channels/{}/messages", elsewhere.id),
            &CreateMessageRequest::story(&character.id, "Wrong place"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_as(
            &player,
            &messages_path,
            &CreateMessageRequest::story(&character.id, ""),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "EMPTY_CONTENT");
}

#[tokio::test]
async fn test_message_edit_and_delete() {
    let server = server().await;
    let owner = server.sign_in("owner").await.unwrap();
    let player = server.sign_in("player").await.unwrap();
    let (channel, character) =
        seeded_channel(&server, &owner, &player, &CreateChannelRequest::public()).await;
    let message = post_message(
        &server,
        &player,
        &channel,
        &CreateMessageRequest::story(&character.id, "Draft"),
    )
    .await;
    let path = format!("/api/v1/messages/{}", message.id);

    let response = server
        .put_as(&owner, &path, &json!({ "content": "Owner edit" }))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "NOT_MESSAGE_AUTHOR");

    let response = server
        .put_as(&player, &path, &json!({ "content": "Final" }))
        .await
        .unwrap();
    let edited: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(edited.content, "Final");
    assert!(edited.is_story);

    // Channel owners moderate their channel
    let response = server.delete_as(&owner, &path).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_as(&player, &path).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_MESSAGE");
}

// ============================================================================
// Bot Tests
// ============================================================================

#[tokio::test]
async fn test_bot_lifecycle() {
    let server = server().await;
    let owner = server.sign_in("owner").await.unwrap();
    let other = server.sign_in("other").await.unwrap();

    let response = server
        .post_as(&owner, "/api/v1/bots", &json!({ "workspace": "acme" }))
        .await
        .unwrap();
    let created: BotCreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.bot.owner_id, owner.user_id.to_string());
    assert_eq!(created.credentials.bot_id, created.bot.id);

    let bot_path = format!("/api/v1/bots/{}", created.bot.id);
    let creds_path = format!("{bot_path}/creds");

    let response = server.get_as(&other, &bot_path).await.unwrap();
    let seen: BotResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(seen.workspace, "acme");

    let response = server.get_as(&other, &creds_path).await.unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "NOT_BOT_OWNER");

    let response = server.post_as(&owner, &creds_path, &json!({})).await.unwrap();
    let rotated: BotCredentialsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_ne!(rotated.client_secret, created.credentials.client_secret);

    let response = server.get_as(&owner, &creds_path).await.unwrap();
    let stored: BotCredentialsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stored.client_id, rotated.client_id);

    let response = server.delete_as(&owner, &bot_path).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_as(&owner, &bot_path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_admin_routes_require_admin() {
    let server = server().await;
    let mira = server.sign_in("mira").await.unwrap();

    let response = server.get_as(&mira, "/api/v1/admin/users").await.unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "ADMIN_REQUIRED");
}

#[tokio::test]
async fn test_admin_ban_blocks_user() {
    let server = server().await;
    let admin = server.sign_in_admin("admin").await.unwrap();
    let mira = server.sign_in("mira").await.unwrap();

    let response = server
        .put_as(
            &admin,
            &format!("/api/v1/admin/users/{}", mira.user_id),
            &json!({ "is_banned": true }),
        )
        .await
        .unwrap();
    let banned: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(banned.is_banned);

    let response = server.get_as(&mira, "/api/v1/channels").await.unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "USER_BANNED");
}

#[tokio::test]
async fn test_admin_cannot_moderate_admin() {
    let server = server().await;
    let admin = server.sign_in_admin("admin").await.unwrap();
    let peer = server.sign_in_admin("peer").await.unwrap();
    let path = format!("/api/v1/admin/users/{}", peer.user_id);

    let response = server
        .put_as(&admin, &path, &json!({ "is_banned": true }))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "CANNOT_MODERATE_ADMIN");

    let response = server.delete_as(&admin, &path).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.get_as(&admin, &path).await.unwrap();
    let untouched: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!untouched.is_banned);
}

#[tokio::test]
async fn test_admin_sees_and_moderates_private_channels() {
    let server = server().await;
    let admin = server.sign_in_admin("admin").await.unwrap();
    let owner = server.sign_in("owner").await.unwrap();
    let player = server.sign_in("player").await.unwrap();
    let (channel, character) =
        seeded_channel(&server, &owner, &player, &CreateChannelRequest::private()).await;
    let message = post_message(
        &server,
        &player,
        &channel,
        &CreateMessageRequest::meta(&character.id, "secret plans"),
    )
    .await;

    let response = server.get_as(&admin, "/api/v1/admin/channels").await.unwrap();
    let all: Vec<ChannelResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(all.iter().any(|c| c.id == channel.id));

    let response = server
        .get_as(
            &admin,
            &format!("/api/v1/admin/channels/{}/messages", channel.id),
        )
        .await
        .unwrap();
    let messages: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(messages.len(), 1);

    let response = server
        .put_as(
            &admin,
            &format!("/api/v1/admin/messages/{}", message.id),
            &json!({ "content": "[redacted]" }),
        )
        .await
        .unwrap();
    let redacted: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(redacted.content, "[redacted]");

    let response = server
        .delete_as(&admin, &format!("/api/v1/admin/characters/{}", character.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_as(
            &admin,
            &format!("/api/v1/admin/channels/{}/characters", channel.id),
        )
        .await
        .unwrap();
    let characters: Vec<CharacterResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(characters.is_empty());
}

// ============================================================================
// Public Tests
// ============================================================================

#[tokio::test]
async fn test_public_surface_is_anonymous() {
    let server = server().await;
    let owner = server.sign_in("owner").await.unwrap();
    let player = server.sign_in("player").await.unwrap();
    let (public, character) =
        seeded_channel(&server, &owner, &player, &CreateChannelRequest::public()).await;
    let (private, _) =
        seeded_channel(&server, &owner, &player, &CreateChannelRequest::private()).await;
    post_message(
        &server,
        &player,
        &public,
        &CreateMessageRequest::story(&character.id, "Chapter one."),
    )
    .await;
    post_message(
        &server,
        &player,
        &public,
        &CreateMessageRequest::meta(&character.id, "ooc"),
    )
    .await;

    let response = server.get("/api/v1/public/channels").await.unwrap();
    let channels: Vec<ChannelResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(channels.iter().any(|c| c.id == public.id));
    assert!(channels.iter().all(|c| !c.is_private));

    let response = server
        .get(&format!("/api/v1/public/channels/{}/messages", public.id))
        .await
        .unwrap();
    let messages: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].msg_type, "story");

    let response = server
        .get(&format!("/api/v1/public/channels/{}", private.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
