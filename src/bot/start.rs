use serenity::all::{ActivityData, Client, Context, EventHandler, GatewayIntents, Guild, Ready};
use serenity::async_trait;
use tokio::sync::watch;

use crate::config::Config;
use crate::error::AppError;

/// Discord bot event handler
struct Handler {
    ready_tx: watch::Sender<bool>,
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!("{} is connected to Discord!", ready.user.name);

        ctx.set_activity(Some(ActivityData::watching("my dms")));

        // Unblocks the web server startup waiting in wait_until_ready.
        let _ = self.ready_tx.send(true);
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, _ctx: Context, guild: Guild, is_new: Option<bool>) {
        if is_new == Some(true) {
            tracing::info!("Joined guild {} ({})", guild.name, guild.id);
        } else {
            tracing::debug!(
                "Guild available: {} ({}) - member_count: {}",
                guild.name,
                guild.id,
                guild.member_count
            );
        }
    }
}

/// Builds the Discord bot client and the readiness channel.
///
/// The caller takes the cache and shard-manager handles off the returned
/// client before moving it into its own task via `start_bot`.
///
/// # Arguments
/// - `config` - Application configuration with the bot token
///
/// # Returns
/// - `Ok((Client, watch::Receiver<bool>))` - The unstarted client and the readiness signal
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(config: &Config) -> Result<(Client, watch::Receiver<bool>), AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in the Discord
    // Developer Portal. It keeps member and owner data in the cache for the
    // /guild and /stats reads.
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let (ready_tx, ready_rx) = watch::channel(false);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler { ready_tx })
        .await?;

    Ok((client, ready_rx))
}

/// Starts the Discord bot in a blocking manner
///
/// This function should be called from within a tokio::spawn task since it
/// will block until the bot shuts down.
///
/// # Arguments
/// - `client` - The client built by `init_bot`
///
/// # Returns
/// - `Ok(())` if the bot runs until shutdown
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}

/// Blocks until the bot's `ready` event has fired.
///
/// # Returns
/// - `Ok(())` - The bot signalled readiness
/// - `Err(AppError)` - The bot shut down before becoming ready
pub async fn wait_until_ready(mut ready_rx: watch::Receiver<bool>) -> Result<(), AppError> {
    ready_rx.wait_for(|ready| *ready).await.map_err(|_| {
        AppError::InternalError("Discord bot shut down before signalling readiness".to_string())
    })?;

    Ok(())
}
