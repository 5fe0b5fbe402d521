//! Message model -> entity mapper

use tale_core::entities::Message;
use tale_core::value_objects::Snowflake;

use crate::models::MessageModel;

impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: Snowflake::new(model.id),
            channel_id: Snowflake::new(model.channel_id),
            character_id: Snowflake::new(model.character_id),
            content: model.content,
            is_story: model.is_story,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
