//! Discord REST API models for caller identity and guild membership.
//!
//! These are the shapes the gateway decodes Discord's `/users/@me` and
//! `/users/@me/guilds` responses into. Decoding is strict on purpose: every
//! field Discord documents as always-present is required here, so a missing
//! or mistyped field fails the decode instead of propagating bad data. Extra
//! fields Discord adds over time are ignored.

use serde::Deserialize;
use serenity::all::{GuildId, Permissions, UserId};

/// CDN URL of Discord's default embed avatar, used when a user or guild has
/// no uploaded image.
pub const DEFAULT_AVATAR_URL: &str = "https://cdn.discordapp.com/embed/avatars/0.png";

/// The authenticated caller's own profile from `/users/@me`.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscordUser {
    pub id: UserId,
    pub username: String,
    /// Legacy four-digit tag; `"0"` for accounts migrated to unique usernames.
    pub discriminator: Option<String>,
    /// Avatar image hash, if the user has uploaded one.
    pub avatar: Option<String>,
}

impl DiscordUser {
    /// Full CDN URL of the user's avatar, falling back to the default embed
    /// avatar for users without one.
    pub fn avatar_url(&self) -> String {
        match &self.avatar {
            Some(hash) => format!(
                "https://cdn.discordapp.com/avatars/{}/{}.png",
                self.id, hash
            ),
            None => DEFAULT_AVATAR_URL.to_string(),
        }
    }
}

/// One guild membership of the caller, as returned by `/users/@me/guilds`.
///
/// `permissions` is the caller's effective permission bitmask in that guild;
/// Discord serializes it as a string of the bits, which `Permissions` handles.
/// The order of these in the provider's response is not guaranteed stable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserGuild {
    pub id: GuildId,
    pub name: String,
    /// Icon image hash, if the guild has one.
    pub icon: Option<String>,
    /// Whether the caller owns the guild.
    pub owner: bool,
    /// The caller's permission bitmask in this guild.
    pub permissions: Permissions,
    pub features: Vec<String>,
}

impl UserGuild {
    /// Full CDN URL of the guild's icon, or `None` for icon-less guilds.
    pub fn icon_url(&self) -> Option<String> {
        self.icon
            .as_ref()
            .map(|hash| format!("https://cdn.discordapp.com/icons/{}/{}.png", self.id, hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_avatar_url_uses_hash_when_present() {
        let user: DiscordUser = serde_json::from_value(serde_json::json!({
            "id": "739440618107043901",
            "username": "tricked",
            "discriminator": "0",
            "avatar": "a1b2c3",
        }))
        .unwrap();

        assert_eq!(
            user.avatar_url(),
            "https://cdn.discordapp.com/avatars/739440618107043901/a1b2c3.png"
        );
    }

    #[test]
    fn user_avatar_url_falls_back_to_default() {
        let user: DiscordUser = serde_json::from_value(serde_json::json!({
            "id": "1",
            "username": "nobody",
            "discriminator": null,
            "avatar": null,
        }))
        .unwrap();

        assert_eq!(user.avatar_url(), DEFAULT_AVATAR_URL);
    }

    #[test]
    fn guild_icon_url_is_none_without_icon() {
        let guild: UserGuild = serde_json::from_value(serde_json::json!({
            "id": "111",
            "name": "Support",
            "icon": null,
            "owner": false,
            "permissions": "32",
            "features": [],
        }))
        .unwrap();

        assert_eq!(guild.icon_url(), None);
        assert!(guild.permissions.contains(Permissions::MANAGE_GUILD));
    }

    #[test]
    fn guild_decode_rejects_missing_permissions() {
        let result: Result<UserGuild, _> = serde_json::from_value(serde_json::json!({
            "id": "111",
            "name": "Support",
            "icon": null,
            "owner": false,
            "features": [],
        }));

        assert!(result.is_err());
    }
}
