//! Per-guild modmail configuration and open-ticket lookups.
//!
//! The gateway treats ticket storage as an external key-value collaborator:
//! it reads configuration and open-ticket lists by guild id and never writes.
//! The bot's command side owns the writes through `MemoryTicketStore`.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::model::ticket::{GuildSettings, OpenTicket};

/// Read-only lookup interface over stored modmail data.
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Stored configuration for a guild, or `None` if the guild was never
    /// set up.
    async fn guild_settings(&self, guild_id: u64) -> Option<GuildSettings>;

    /// All currently-open tickets for a guild, oldest first.
    async fn open_tickets(&self, guild_id: u64) -> Vec<OpenTicket>;
}

#[derive(Default)]
struct StoredGuild {
    settings: Option<GuildSettings>,
    tickets: Vec<OpenTicket>,
}

/// In-process ticket store shared between the bot's command side (writer)
/// and the gateway (reader).
#[derive(Default)]
pub struct MemoryTicketStore {
    guilds: RwLock<HashMap<u64, StoredGuild>>,
}

impl MemoryTicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores or replaces a guild's modmail configuration.
    pub async fn set_guild_settings(&self, guild_id: u64, settings: GuildSettings) {
        let mut guilds = self.guilds.write().await;
        guilds.entry(guild_id).or_default().settings = Some(settings);
    }

    /// Records a newly-opened ticket thread.
    pub async fn open_ticket(&self, guild_id: u64, ticket: OpenTicket) {
        let mut guilds = self.guilds.write().await;
        guilds.entry(guild_id).or_default().tickets.push(ticket);
    }

    /// Removes a ticket once its channel is closed.
    pub async fn close_ticket(&self, guild_id: u64, channel_id: u64) {
        let mut guilds = self.guilds.write().await;
        if let Some(guild) = guilds.get_mut(&guild_id) {
            guild.tickets.retain(|ticket| ticket.channel_id != channel_id);
        }
    }
}

#[async_trait]
impl TicketStore for MemoryTicketStore {
    async fn guild_settings(&self, guild_id: u64) -> Option<GuildSettings> {
        let guilds = self.guilds.read().await;
        guilds.get(&guild_id).and_then(|guild| guild.settings.clone())
    }

    async fn open_tickets(&self, guild_id: u64) -> Vec<OpenTicket> {
        let guilds = self.guilds.read().await;
        guilds
            .get(&guild_id)
            .map(|guild| guild.tickets.clone())
            .unwrap_or_default()
    }
}
