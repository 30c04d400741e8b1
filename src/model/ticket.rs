//! Stored modmail configuration and open-ticket records.

/// Per-guild modmail configuration as stored by the bot's setup command.
///
/// All three fields are raw Discord ids; the referenced role or channel may
/// have been deleted since the configuration was written, so resolution
/// against the guild's directory happens per request and tolerates misses.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSettings {
    /// Role pinged for and allowed to handle tickets.
    pub staff_role: u64,
    /// Category channel new ticket channels are created under.
    pub category: u64,
    /// Channel ticket transcripts are posted to.
    pub transcripts: u64,
}

/// One currently-open modmail thread.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenTicket {
    /// The user the ticket belongs to.
    pub user_id: u64,
    /// The guild channel mirroring the user's DMs.
    pub channel_id: u64,
}
