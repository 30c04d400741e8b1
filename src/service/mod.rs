//! Service layer between the HTTP controllers and external collaborators.
//!
//! - `oauth` - Authorization-code exchange against Discord's token endpoint
//! - `discord` - Caller identity and guild-membership lookups with a bearer token
//! - `guild` - Pure intersection/permission filtering of guild lists

pub mod discord;
pub mod guild;
pub mod oauth;
