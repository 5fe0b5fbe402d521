//! Raw tables of the in-memory store

use std::collections::{BTreeMap, BTreeSet};

use tale_core::entities::{Bot, BotCredentials, Channel, Character, Message, User};
use tale_core::value_objects::Snowflake;

/// All tables, keyed by id; credentials are keyed by bot id
#[derive(Debug, Default)]
pub(super) struct State {
    pub users: BTreeMap<Snowflake, User>,
    pub channels: BTreeMap<Snowflake, Channel>,
    pub characters: BTreeMap<Snowflake, Character>,
    pub messages: BTreeMap<Snowflake, Message>,
    pub bots: BTreeMap<Snowflake, Bot>,
    pub credentials: BTreeMap<Snowflake, BotCredentials>,
}

impl State {
    pub fn has_character(&self, user_id: Snowflake, channel_id: Snowflake) -> bool {
        self.characters
            .values()
            .any(|c| c.user_id == user_id && c.channel_id == channel_id)
    }

    /// Owner plus every user with a character in the channel, ordered by id
    pub fn member_ids(&self, channel_id: Snowflake) -> BTreeSet<Snowflake> {
        let mut ids: BTreeSet<Snowflake> = self
            .characters
            .values()
            .filter(|c| c.channel_id == channel_id)
            .map(|c| c.user_id)
            .collect();
        if let Some(channel) = self.channels.get(&channel_id) {
            ids.insert(channel.owner_id);
        }
        ids
    }

    pub fn client_id_taken(&self, client_id: &str, except_bot: Option<Snowflake>) -> bool {
        self.credentials
            .values()
            .any(|c| c.client_id == client_id && Some(c.bot_id) != except_bot)
    }

    /// Messages, then characters, then the channel itself
    pub fn purge_channel(&mut self, channel_id: Snowflake) {
        self.messages.retain(|_, m| m.channel_id != channel_id);
        self.characters.retain(|_, c| c.channel_id != channel_id);
        self.channels.remove(&channel_id);
    }
}
