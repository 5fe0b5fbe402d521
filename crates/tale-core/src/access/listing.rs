//! Channel listing filters and merging

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::Channel;
use crate::error::DomainError;

/// Which channels a listing should include
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelListLevel {
    /// Public channels, private ones the caller belongs to, and owned ones
    #[default]
    Visible,
    /// Only channels the caller owns
    Owner,
    /// Owned channels plus channels the caller has a character in
    Member,
}

impl FromStr for ChannelListLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::Visible),
            "owner" => Ok(Self::Owner),
            "member" => Ok(Self::Member),
            other => Err(DomainError::UnknownListLevel(other.to_string())),
        }
    }
}

/// Merge several channel listings, dropping duplicates by id.
///
/// The first occurrence wins and insertion order is preserved.
pub fn merge_channel_listings<I>(sources: I) -> Vec<Channel>
where
    I: IntoIterator<Item = Vec<Channel>>,
{
    let mut seen = HashSet::new();
    let mut merged = Vec::new();
    for channel in sources.into_iter().flatten() {
        if seen.insert(channel.id) {
            merged.push(channel);
        }
    }
    merged
}
