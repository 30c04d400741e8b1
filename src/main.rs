mod bot;
mod config;
mod controller;
mod data;
mod error;
mod model;
mod router;
mod service;
mod startup;
mod state;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, data::tickets::MemoryTicketStore, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;
    let ticket_store = Arc::new(MemoryTicketStore::new());

    // Initialize the Discord bot and take read-only handles to its cache
    // before handing the client off to its own task.
    let (bot_client, ready_rx) = bot::start::init_bot(&config).await?;
    let roster = Arc::new(bot::roster::CacheRoster::new(
        bot_client.cache.clone(),
        bot_client.shard_manager.clone(),
    ));

    // Start the Discord bot in a separate task
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    // The gateway serves data out of the bot's cache, so the socket is not
    // bound until the bot has finished its initial connection.
    bot::start::wait_until_ready(ready_rx).await?;

    let state = AppState::new(
        http_client,
        oauth_client,
        roster,
        ticket_store,
        config.discord_api_url.clone(),
        config.command_prefixes.clone(),
    );

    let app = router::router().with_state(state);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Web server started at PORT: {} HOST: 0.0.0.0", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped");

    Ok(())
}

/// Resolves when the process receives ctrl-c, triggering graceful shutdown
/// of the listening socket.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install ctrl-c handler: {}", e);
    }
}
