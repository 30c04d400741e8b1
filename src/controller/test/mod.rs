//! Route-level tests exercising the full router with fixed collaborators
//! and a mock Discord server.

mod auth;
mod stats;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use tower::ServiceExt;

use crate::{
    data::{roster::GuildRoster, tickets::TicketStore},
    model::roster::{BotGuild, OwnerProfile, RosterChannel, RosterRole},
    router::router,
    state::AppState,
};

/// Builds an `AppState` around fixed collaborators, pointing the Discord
/// endpoints at the given (usually mock) URLs.
pub(crate) fn test_state(
    roster: Arc<dyn GuildRoster>,
    ticket_store: Arc<dyn TicketStore>,
    discord_api_url: &str,
    token_url: &str,
) -> AppState {
    let oauth_client = BasicClient::new(ClientId::new("123456".to_string()))
        .set_client_secret(ClientSecret::new("secret".to_string()))
        .set_auth_uri(AuthUrl::new("https://discord.com/oauth2/authorize".to_string()).unwrap())
        .set_token_uri(TokenUrl::new(token_url.to_string()).unwrap())
        .set_redirect_uri(
            RedirectUrl::new("https://dashboard.example/callback".to_string()).unwrap(),
        );

    AppState::new(
        reqwest::Client::new(),
        oauth_client,
        roster,
        ticket_store,
        discord_api_url.to_string(),
        vec!["s!".to_string(), "S!".to_string()],
    )
}

pub(crate) fn test_app(state: AppState) -> Router {
    router().with_state(state)
}

/// Sends one request through the router and returns the status plus the
/// decoded JSON body.
pub(crate) async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();

    (status, json)
}

/// Roster snapshot fixture with a full role/channel directory and owner.
pub(crate) fn bot_guild(guild_id: u64) -> BotGuild {
    BotGuild {
        guild_id,
        name: format!("Guild {}", guild_id),
        description: Some("A support server".to_string()),
        icon_url: None,
        banner_url: None,
        member_count: 42,
        owner: Some(OwnerProfile {
            user_id: 739440618107043901,
            username: "tricked".to_string(),
            discriminator: "0".to_string(),
            avatar_url: "https://cdn.discordapp.com/embed/avatars/0.png".to_string(),
        }),
        roles: vec![RosterRole {
            role_id: 10,
            name: "Mods".to_string(),
            color: "#1abc9c".to_string(),
        }],
        channels: vec![
            RosterChannel {
                channel_id: 20,
                name: "tickets".to_string(),
            },
            RosterChannel {
                channel_id: 30,
                name: "transcripts".to_string(),
            },
        ],
    }
}
