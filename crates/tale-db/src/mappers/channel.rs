//! Channel model -> entity mapper

use tale_core::entities::Channel;
use tale_core::value_objects::Snowflake;

use crate::models::ChannelModel;

impl From<ChannelModel> for Channel {
    fn from(model: ChannelModel) -> Self {
        Channel {
            id: Snowflake::new(model.id),
            owner_id: Snowflake::new(model.owner_id),
            name: model.name,
            description: model.description,
            topic: model.topic,
            is_private: model.is_private,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
