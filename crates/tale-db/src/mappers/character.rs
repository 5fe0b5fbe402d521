//! Character model -> entity mapper

use tale_core::entities::Character;
use tale_core::value_objects::Snowflake;

use crate::models::CharacterModel;

impl From<CharacterModel> for Character {
    fn from(model: CharacterModel) -> Self {
        Character {
            id: Snowflake::new(model.id),
            channel_id: Snowflake::new(model.channel_id),
            user_id: Snowflake::new(model.user_id),
            name: model.name,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
