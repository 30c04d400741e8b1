//! Domain models and API data-transfer objects.
//!
//! - `api` - Request/response DTOs for the gateway's JSON surface
//! - `discord` - Strictly-decoded Discord REST API models (caller identity and guilds)
//! - `roster` - Point-in-time snapshot types read from the live bot roster
//! - `ticket` - Stored modmail configuration and open-ticket records

pub mod api;
pub mod discord;
pub mod roster;
pub mod ticket;
