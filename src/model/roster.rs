//! Point-in-time snapshot types read from the live bot roster.
//!
//! The bot's cache is owned and mutated by its own event loop; request
//! handlers only ever see these owned snapshots, taken in a single read.
//! A guild disappearing between two reads within one request is therefore
//! "not found", never a dangling reference.

use std::time::Duration;

/// Owned snapshot of one guild the bot is a member of.
#[derive(Debug, Clone, PartialEq)]
pub struct BotGuild {
    pub guild_id: u64,
    pub name: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub banner_url: Option<String>,
    pub member_count: u64,
    /// Owner profile, if the owner was present in the cache at snapshot time.
    pub owner: Option<OwnerProfile>,
    /// Role directory for resolving stored role ids to display data.
    pub roles: Vec<RosterRole>,
    /// Channel directory (text channels and categories) for resolving stored
    /// channel ids to display data.
    pub channels: Vec<RosterChannel>,
}

impl BotGuild {
    /// Looks up a role by id in the snapshot's role directory.
    pub fn role(&self, role_id: u64) -> Option<&RosterRole> {
        self.roles.iter().find(|role| role.role_id == role_id)
    }

    /// Looks up a channel by id in the snapshot's channel directory.
    pub fn channel(&self, channel_id: u64) -> Option<&RosterChannel> {
        self.channels
            .iter()
            .find(|channel| channel.channel_id == channel_id)
    }
}

/// Guild owner's profile as cached by the bot.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerProfile {
    pub user_id: u64,
    pub username: String,
    pub discriminator: String,
    pub avatar_url: String,
}

/// One entry in a guild's role directory.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterRole {
    pub role_id: u64,
    pub name: String,
    /// Role color as a `#rrggbb` hex string.
    pub color: String,
}

/// One entry in a guild's channel directory.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterChannel {
    pub channel_id: u64,
    pub name: String,
}

/// Bot-wide counters for the `/stats` endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterStats {
    pub guild_count: usize,
    pub user_count: usize,
    /// Most recent gateway heartbeat latency; zero until the first heartbeat
    /// acknowledgement arrives.
    pub latency: Duration,
}
