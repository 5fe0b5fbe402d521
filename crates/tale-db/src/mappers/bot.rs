//! Bot model -> entity mappers

use tale_core::entities::{Bot, BotCredentials};
use tale_core::value_objects::Snowflake;

use crate::models::{BotCredentialsModel, BotModel};

impl From<BotModel> for Bot {
    fn from(model: BotModel) -> Self {
        Bot {
            id: Snowflake::new(model.id),
            owner_id: Snowflake::new(model.owner_id),
            workspace: model.workspace,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<BotCredentialsModel> for BotCredentials {
    fn from(model: BotCredentialsModel) -> Self {
        BotCredentials {
            id: Snowflake::new(model.id),
            bot_id: Snowflake::new(model.bot_id),
            client_id: model.client_id,
            client_secret: model.client_secret,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
