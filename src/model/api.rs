//! Request and response DTOs for the gateway's JSON surface.
//!
//! Field names and shapes match what the deployed dashboard already consumes,
//! including the nested `{"code": {"code": ...}}` callback body and the
//! camelCase keys inside the guild settings payload.

use serde::{Deserialize, Serialize};

use crate::model::{
    discord::{DiscordUser, UserGuild, DEFAULT_AVATAR_URL},
    roster::{BotGuild, OwnerProfile, RosterChannel, RosterRole},
    ticket::OpenTicket,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Body of `POST /oauth/callback`.
///
/// The dashboard wraps the authorization code twice; both layers are optional
/// here so a missing code becomes a 400 instead of a deserialization fault.
#[derive(Debug, Deserialize)]
pub struct CallbackDto {
    #[serde(default)]
    pub code: Option<CallbackCodeDto>,
}

#[derive(Debug, Deserialize)]
pub struct CallbackCodeDto {
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AccessTokenDto {
    pub access_token: String,
}

/// Caller or guild-owner profile as returned by `/users/me` and inside
/// `/guild` payloads.
#[derive(Debug, Serialize)]
pub struct OwnUserDto {
    pub id: u64,
    pub username: String,
    pub discriminator: String,
    pub avatar: String,
}

impl From<DiscordUser> for OwnUserDto {
    fn from(user: DiscordUser) -> Self {
        let avatar = user.avatar_url();

        Self {
            id: user.id.get(),
            username: user.username,
            discriminator: user.discriminator.unwrap_or_else(|| "0".to_string()),
            avatar,
        }
    }
}

impl From<&OwnerProfile> for OwnUserDto {
    fn from(owner: &OwnerProfile) -> Self {
        Self {
            id: owner.user_id,
            username: owner.username.clone(),
            discriminator: owner.discriminator.clone(),
            avatar: owner.avatar_url.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GuildListDto {
    pub guilds: Vec<ManageableGuildDto>,
}

/// One guild the caller can manage and the bot is installed in.
#[derive(Debug, Serialize)]
pub struct ManageableGuildDto {
    /// Guild id as a string, as the OAuth API returned it.
    pub id: String,
    pub name: String,
    pub icon_url: Option<String>,
}

impl From<&UserGuild> for ManageableGuildDto {
    fn from(guild: &UserGuild) -> Self {
        Self {
            id: guild.id.to_string(),
            name: guild.name.clone(),
            icon_url: guild.icon_url(),
        }
    }
}

/// Full guild payload for `GET /guild`.
///
/// Public metadata is always present; `settings` is null when the guild has
/// no stored modmail configuration.
#[derive(Debug, Serialize)]
pub struct GuildDataDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub icon: String,
    pub banner: Option<String>,
    pub members: u64,
    pub owner: Option<OwnUserDto>,
    pub settings: Option<GuildSettingsDto>,
}

impl GuildDataDto {
    /// Builds the public-metadata part of the payload from a roster snapshot,
    /// with `settings` left for the caller to fill in.
    pub fn from_snapshot(guild: &BotGuild, settings: Option<GuildSettingsDto>) -> Self {
        Self {
            id: guild.guild_id.to_string(),
            name: guild.name.clone(),
            description: guild.description.clone(),
            icon: guild
                .icon_url
                .clone()
                .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_string()),
            banner: guild.banner_url.clone(),
            members: guild.member_count,
            owner: guild.owner.as_ref().map(OwnUserDto::from),
            settings,
        }
    }
}

/// Stored modmail configuration resolved against the guild's directory.
///
/// Each resolved reference is independently nullable: a deleted role or
/// channel surfaces as null without hiding the rest of the settings.
#[derive(Debug, Serialize)]
pub struct GuildSettingsDto {
    pub prefixes: Vec<String>,
    #[serde(rename = "modRole")]
    pub mod_role: Option<RoleDto>,
    #[serde(rename = "ticketCategory")]
    pub ticket_category: Option<ChannelDto>,
    #[serde(rename = "transcriptsChannel")]
    pub transcripts_channel: Option<ChannelDto>,
    #[serde(rename = "currentTickets")]
    pub current_tickets: Vec<TicketDto>,
}

#[derive(Debug, Serialize)]
pub struct RoleDto {
    pub id: u64,
    pub name: String,
    pub color: String,
}

impl From<&RosterRole> for RoleDto {
    fn from(role: &RosterRole) -> Self {
        Self {
            id: role.role_id,
            name: role.name.clone(),
            color: role.color.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChannelDto {
    pub id: u64,
    pub name: String,
}

impl From<&RosterChannel> for ChannelDto {
    fn from(channel: &RosterChannel) -> Self {
        Self {
            id: channel.channel_id,
            name: channel.name.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TicketDto {
    #[serde(rename = "userId")]
    pub user_id: u64,
    #[serde(rename = "channelId")]
    pub channel_id: u64,
}

impl From<&OpenTicket> for TicketDto {
    fn from(ticket: &OpenTicket) -> Self {
        Self {
            user_id: ticket.user_id,
            channel_id: ticket.channel_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BotStatsDto {
    pub guilds: usize,
    pub users: usize,
    /// Gateway heartbeat latency in milliseconds, rounded to two decimals.
    pub ping: f64,
}
