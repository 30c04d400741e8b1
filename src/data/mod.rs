//! Collaborator interfaces for data the gateway reads but does not own.
//!
//! The gateway holds no storage of its own. Guild rosters live in the bot's
//! cache and modmail configuration lives in the ticket store; both are
//! injected into `AppState` behind the read-only traits defined here so
//! request handlers never touch a shared mutable collection directly.

pub mod roster;
pub mod tickets;
