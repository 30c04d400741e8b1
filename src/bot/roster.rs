//! Roster snapshots over serenity's cache.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serenity::all::{Cache, GuildId, ShardManager};

use crate::data::roster::GuildRoster;
use crate::model::roster::{BotGuild, OwnerProfile, RosterChannel, RosterRole, RosterStats};

/// `GuildRoster` implementation reading serenity's live cache.
///
/// The cache is mutated by the bot's event loop; every accessor here copies
/// what it needs into owned values before returning, so handlers never hold
/// a cache reference across an await point.
pub struct CacheRoster {
    cache: Arc<Cache>,
    shard_manager: Arc<ShardManager>,
}

impl CacheRoster {
    pub fn new(cache: Arc<Cache>, shard_manager: Arc<ShardManager>) -> Self {
        Self {
            cache,
            shard_manager,
        }
    }
}

#[async_trait]
impl GuildRoster for CacheRoster {
    async fn guild_ids(&self) -> HashSet<GuildId> {
        self.cache.guilds().into_iter().collect()
    }

    async fn guild(&self, guild_id: u64) -> Option<BotGuild> {
        // GuildId is a non-zero integer; zero can never be a cache hit.
        if guild_id == 0 {
            return None;
        }

        let guild = self.cache.guild(GuildId::new(guild_id))?;

        let owner = guild.members.get(&guild.owner_id).map(|member| OwnerProfile {
            user_id: member.user.id.get(),
            username: member.user.name.clone(),
            discriminator: member
                .user
                .discriminator
                .map(|d| format!("{:04}", d.get()))
                .unwrap_or_else(|| "0".to_string()),
            avatar_url: member.face(),
        });

        let roles = guild
            .roles
            .values()
            .map(|role| RosterRole {
                role_id: role.id.get(),
                name: role.name.clone(),
                color: format!("#{:06x}", role.colour.0),
            })
            .collect();

        let channels = guild
            .channels
            .values()
            .map(|channel| RosterChannel {
                channel_id: channel.id.get(),
                name: channel.name.clone(),
            })
            .collect();

        Some(BotGuild {
            guild_id,
            name: guild.name.clone(),
            description: guild.description.clone(),
            icon_url: guild.icon_url(),
            banner_url: guild.banner_url(),
            member_count: guild.member_count,
            owner,
            roles,
            channels,
        })
    }

    async fn stats(&self) -> RosterStats {
        let latency = {
            let runners = self.shard_manager.runners.lock().await;
            runners
                .values()
                .find_map(|runner| runner.latency)
                .unwrap_or(Duration::ZERO)
        };

        RosterStats {
            guild_count: self.cache.guild_count(),
            user_count: self.cache.user_count(),
            latency,
        }
    }
}
