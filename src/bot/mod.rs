//! Discord bot integration backing the gateway's roster reads.
//!
//! The bot connects to Discord's gateway with the `GUILDS` and
//! `GUILD_MEMBERS` intents and keeps serenity's cache populated with the
//! guilds it is a member of. The gateway never talks to this module's event
//! loop directly; it reads snapshots through `CacheRoster`, and startup
//! waits on the readiness signal the `ready` handler fires before binding
//! the listening socket.
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly
//! enabled in the Discord Developer Portal for the bot application.

pub mod roster;
pub mod start;
