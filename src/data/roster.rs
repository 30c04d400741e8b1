//! Read-only access to the live bot roster.
//!
//! Ownership and mutation of the roster stay with the Discord bot's event
//! loop; the gateway is handed this interface at construction and only takes
//! point-in-time snapshots through it.

use std::collections::HashSet;

use async_trait::async_trait;
use serenity::all::GuildId;

use crate::model::roster::{BotGuild, RosterStats};

/// Read-only snapshot interface over the guilds the bot is a member of.
#[async_trait]
pub trait GuildRoster: Send + Sync {
    /// Ids of every guild the bot is currently in.
    async fn guild_ids(&self) -> HashSet<GuildId>;

    /// Owned snapshot of one guild, or `None` if the bot is not (or no
    /// longer) a member. Takes a raw u64 so unparseable or out-of-range ids
    /// simply miss instead of failing.
    async fn guild(&self, guild_id: u64) -> Option<BotGuild>;

    /// Bot-wide counters and gateway latency.
    async fn stats(&self) -> RosterStats;
}
