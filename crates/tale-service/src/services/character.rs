//! Character service
//!
//! Characters are how users join channels: the channel owner creates one for
//! a user, and from then on that user is a member.

use tale_core::entities::Character;
use tale_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CharacterResponse, CreateCharacterRequest, UpdateCharacterRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Character service
pub struct CharacterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CharacterService<'a> {
    /// Create a new CharacterService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn permissions(&self) -> PermissionService<'a> {
        PermissionService::new(self.ctx)
    }

    /// List characters of a channel (members only)
    #[instrument(skip(self))]
    pub async fn list_characters(
        &self,
        user_id: Snowflake,
        channel_id: Snowflake,
    ) -> ServiceResult<Vec<CharacterResponse>> {
        let perms = self.permissions();
        let user = perms.actor(user_id).await?;
        let channel = perms.channel(channel_id).await?;
        perms.require_member(&user, &channel).await?;

        let characters = self.ctx.character_repo().find_by_channel(channel_id).await?;
        Ok(characters.iter().map(CharacterResponse::from).collect())
    }

    /// Get a character (members of its channel only)
    #[instrument(skip(self))]
    pub async fn get_character(
        &self,
        user_id: Snowflake,
        character_id: Snowflake,
    ) -> ServiceResult<CharacterResponse> {
        let perms = self.permissions();
        let user = perms.actor(user_id).await?;
        let character = perms.character(character_id).await?;
        let channel = perms.channel(character.channel_id).await?;
        perms.require_member(&user, &channel).await?;

        Ok(CharacterResponse::from(&character))
    }

    /// Create a character for `request.user_id` (channel owner only)
    #[instrument(skip(self, request))]
    pub async fn create_character(
        &self,
        user_id: Snowflake,
        channel_id: Snowflake,
        request: CreateCharacterRequest,
    ) -> ServiceResult<CharacterResponse> {
        let perms = self.permissions();
        let user = perms.actor(user_id).await?;
        let channel = perms.channel(channel_id).await?;
        perms.require_owner(&user, &channel)?;

        let player = perms.user(request.user_id).await?;
        if request.name.trim().is_empty() {
            return Err(DomainError::EmptyCharacterName.into());
        }

        let mut character =
            Character::new(self.ctx.generate_id(), channel.id, player.id, request.name);
        if let Some(description) = request.description {
            character.description = description;
        }
        self.ctx.character_repo().create(&character).await?;

        info!(
            character_id = %character.id,
            channel_id = %channel_id,
            user_id = %player.id,
            "Character created"
        );

        Ok(CharacterResponse::from(&character))
    }

    /// Update a character (its player only)
    #[instrument(skip(self, request))]
    pub async fn update_character(
        &self,
        user_id: Snowflake,
        character_id: Snowflake,
        request: UpdateCharacterRequest,
    ) -> ServiceResult<CharacterResponse> {
        let perms = self.permissions();
        let user = perms.actor(user_id).await?;
        let mut character = perms.character(character_id).await?;

        if !character.is_owned_by(user.id) {
            return Err(DomainError::NotCharacterOwner.into());
        }
        apply_character_update(&mut character, request)?;
        self.ctx.character_repo().update(&character).await?;

        info!(character_id = %character_id, "Character updated");

        Ok(CharacterResponse::from(&character))
    }

    /// Delete a character and its messages (its player or the channel owner)
    #[instrument(skip(self))]
    pub async fn delete_character(
        &self,
        user_id: Snowflake,
        character_id: Snowflake,
    ) -> ServiceResult<()> {
        let perms = self.permissions();
        let user = perms.actor(user_id).await?;
        let character = perms.character(character_id).await?;

        if !character.is_owned_by(user.id) {
            let channel = perms.channel(character.channel_id).await?;
            if perms.require_owner(&user, &channel).is_err() {
                return Err(DomainError::NotCharacterOwner.into());
            }
        }

        self.ctx
            .cascade_repo()
            .delete_character_cascade(character_id)
            .await?;

        info!(character_id = %character_id, "Character deleted");

        Ok(())
    }
}

/// Apply an update request, refusing to blank the name
pub(crate) fn apply_character_update(
    character: &mut Character,
    request: UpdateCharacterRequest,
) -> ServiceResult<()> {
    if let Some(name) = request.name {
        if name.trim().is_empty() {
            return Err(DomainError::EmptyCharacterName.into());
        }
        character.set_name(name);
    }
    if let Some(description) = request.description {
        character.set_description(description);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::TestWorld;
    use tale_core::MessageKind;

    #[tokio::test]
    async fn test_only_owner_invites() {
        let world = TestWorld::new();
        let owner = world.user("owner").await;
        let guest = world.user("guest").await;
        let channel = world.channel(&owner, true).await;
        let service = CharacterService::new(&world.ctx);

        let request = |user_id: Snowflake, name: &str| CreateCharacterRequest {
            user_id,
            name: name.to_string(),
            description: None,
        };

        let err = service
            .create_character(guest.id, channel.id, request(guest.id, "Gatecrasher"))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "NOT_CHANNEL_OWNER");

        let err = service
            .create_character(owner.id, channel.id, request(Snowflake::new(3), "Ghost"))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_USER");

        let err = service
            .create_character(owner.id, channel.id, request(guest.id, " "))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "EMPTY_CHARACTER_NAME");

        let created = service
            .create_character(owner.id, channel.id, request(guest.id, "Knight"))
            .await
            .unwrap();
        assert_eq!(created.user_id, guest.id.to_string());

        let listed = service.list_characters(guest.id, channel.id).await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn test_strangers_cannot_read() {
        let world = TestWorld::new();
        let owner = world.user("owner").await;
        let stranger = world.user("stranger").await;
        let channel = world.channel(&owner, false).await;
        let character = world.character(&channel, &owner, "Sage").await;
        let service = CharacterService::new(&world.ctx);

        assert!(service
            .list_characters(stranger.id, channel.id)
            .await
            .unwrap_err()
            .is_forbidden());
        assert!(service
            .get_character(stranger.id, character.id)
            .await
            .unwrap_err()
            .is_forbidden());
        assert!(service.get_character(owner.id, character.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_rules() {
        let world = TestWorld::new();
        let owner = world.user("owner").await;
        let player = world.user("player").await;
        let channel = world.channel(&owner, false).await;
        let character = world.character(&channel, &player, "Thief").await;
        let service = CharacterService::new(&world.ctx);

        let rename = |name: &str| UpdateCharacterRequest {
            name: Some(name.to_string()),
            description: None,
        };

        let err = service
            .update_character(owner.id, character.id, rename("Hero"))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "NOT_CHARACTER_OWNER");

        let err = service
            .update_character(player.id, character.id, rename(""))
            .await
            .unwrap_err();
        assert!(err.kind() == Some(tale_core::ErrorKind::Validation));

        let updated = service
            .update_character(player.id, character.id, rename("Master Thief"))
            .await
            .unwrap();
        assert_eq!(updated.name, "Master Thief");
    }

    #[tokio::test]
    async fn test_delete_cascades_messages() {
        let world = TestWorld::new();
        let owner = world.user("owner").await;
        let player = world.user("player").await;
        let outsider = world.user("outsider").await;
        let channel = world.channel(&owner, false).await;
        let character = world.character(&channel, &player, "Alchemist").await;
        let spare = world.character(&channel, &player, "Apprentice").await;
        let message = world.message(&character, "Bubbling!", MessageKind::Story).await;
        let service = CharacterService::new(&world.ctx);

        assert!(service
            .delete_character(outsider.id, character.id)
            .await
            .unwrap_err()
            .is_forbidden());

        service.delete_character(player.id, character.id).await.unwrap();
        assert!(world
            .ctx
            .message_repo()
            .find_by_id(message.id)
            .await
            .unwrap()
            .is_none());

        // The channel owner may remove other players' characters too
        service.delete_character(owner.id, spare.id).await.unwrap();
        assert!(!world
            .ctx
            .character_repo()
            .exists_in_channel(player.id, channel.id)
            .await
            .unwrap());
    }
}
